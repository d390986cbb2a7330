pub mod json;
pub mod md;

use crate::error::{Result, ScoringError};
use crate::scoring::round2;
use crate::store::AssessmentStore;
use crate::types::summary::{AssessmentSummary, PillarScore, SummaryEntry};
use crate::types::AssessmentId;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
}

/// The classic four-pillar grouping of the 17 goals.
const PILLARS: [(&str, &[u32]); 4] = [
    ("People", &[1, 2, 3, 4, 5]),
    ("Planet", &[6, 12, 13, 14, 15]),
    ("Prosperity", &[7, 8, 9, 10, 11]),
    ("Peace & Partnership", &[16, 17]),
];

/// Builds the presentation view of an already-scored assessment from the
/// persisted rows. Categories without a persisted row simply do not appear;
/// a freshly scored assessment always has one row per catalog category.
pub fn build_summary<S>(store: &S, assessment_id: AssessmentId) -> Result<AssessmentSummary>
where
    S: AssessmentStore + ?Sized,
{
    if !store.assessment_exists(assessment_id) {
        return Err(ScoringError::AssessmentNotFound(assessment_id));
    }

    let categories: HashMap<_, _> = store
        .categories()
        .into_iter()
        .map(|category| (category.id, category))
        .collect();

    let mut scores: Vec<SummaryEntry> = store
        .score_rows(assessment_id)
        .into_iter()
        .filter_map(|row| {
            let category = categories.get(&row.category_id)?;
            Some(SummaryEntry {
                category_id: row.category_id,
                number: category.number,
                name: category.name.clone(),
                color: category.color.clone(),
                direct_score: row.direct_score,
                bonus_score: row.bonus_score,
                total_score: row.total_score,
                percentage_score: row.percentage_score,
            })
        })
        .collect();
    scores.sort_by_key(|entry| entry.number);

    let pillars = PILLARS
        .iter()
        .map(|(pillar, numbers)| {
            let members: Vec<&SummaryEntry> = scores
                .iter()
                .filter(|entry| numbers.contains(&entry.number))
                .collect();
            let average = if members.is_empty() {
                0.0
            } else {
                round2(
                    members.iter().map(|entry| entry.total_score).sum::<f64>()
                        / members.len() as f64,
                )
            };
            PillarScore {
                pillar: (*pillar).to_string(),
                average,
                categories: numbers.to_vec(),
            }
        })
        .collect();

    let mut ranked = scores.clone();
    ranked.sort_by(|a, b| {
        b.total_score
            .partial_cmp(&a.total_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    let top: Vec<SummaryEntry> = ranked.iter().take(3).cloned().collect();
    let bottom: Vec<SummaryEntry> = ranked.iter().rev().take(3).cloned().collect();

    Ok(AssessmentSummary {
        assessment_id,
        overall_score: store.overall_score(assessment_id).unwrap_or(0.0),
        scores,
        pillars,
        top,
        bottom,
    })
}

pub fn render(summary: &AssessmentSummary, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => json::to_json(summary).map_err(ScoringError::Json),
        OutputFormat::Md => Ok(md::to_markdown(summary)),
    }
}
