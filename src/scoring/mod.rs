//! The scoring pipeline: tally raw responses, normalize each category,
//! propagate cross-category bonuses, aggregate and persist.

pub mod bonus;
pub mod normalize;
pub mod tally;

use crate::config::ScoringConstants;
use crate::error::{Result, ScoringError};
use crate::store::AssessmentStore;
use crate::types::score::{ScoreRow, ScoringOutcome};
use crate::types::{AssessmentId, CategoryId};
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use tracing::{debug, error, warn};

/// Runs the full pipeline for one assessment and persists the result.
///
/// Single pass, no retries: fetch, tally, normalize, propagate, combine,
/// commit. Always safe to re-enter for the same assessment; an unchanged
/// dataset reproduces the previous rows exactly. Two degenerate inputs are
/// terminal states rather than errors: an empty question catalog records an
/// overall score of 0 and nothing else, and an assessment without responses
/// records an explicit zero row for every category.
pub fn score_assessment<S>(
    store: &mut S,
    assessment_id: AssessmentId,
    constants: &ScoringConstants,
) -> Result<ScoringOutcome>
where
    S: AssessmentStore + ?Sized,
{
    if !store.assessment_exists(assessment_id) {
        return Err(ScoringError::AssessmentNotFound(assessment_id));
    }

    let questions = store.questions();
    if questions.is_empty() {
        warn!(assessment_id, "question catalog is empty, recording zero overall score");
        store.commit_scores(assessment_id, &[], 0.0)?;
        return Ok(ScoringOutcome::empty());
    }

    let categories = store.categories();
    let responses = store.responses(assessment_id);
    let now = Utc::now();

    if responses.is_empty() {
        debug!(assessment_id, "no responses, writing zero rows for every category");
        let rows: Vec<ScoreRow> = categories
            .iter()
            .map(|category| zero_row(assessment_id, category.id, now))
            .collect();
        store.commit_scores(assessment_id, &rows, 0.0)?;
        return Ok(ScoringOutcome {
            overall_score: 0.0,
            category_scores: categories.iter().map(|category| (category.id, 0.0)).collect(),
        });
    }

    let tallies = tally::tally_responses(&categories, &questions, &responses);

    let mut direct_scores: BTreeMap<CategoryId, f64> = BTreeMap::new();
    for (category_id, tally) in &tallies {
        let computed = normalize::normalize_direct(tally.raw_score, tally.max_possible, constants);
        // A bad tally (NaN raw scores from drifted upstream data) degrades
        // that category to zero instead of poisoning the whole run.
        let direct = if computed.is_finite() {
            computed
        } else {
            error!(category_id, "non-finite direct score, degrading category to zero");
            0.0
        };
        direct_scores.insert(*category_id, direct);
    }

    let relationships = store.relationships();
    let bonuses = bonus::propagate_bonuses(&relationships, &direct_scores, constants);

    let mut rows = Vec::with_capacity(categories.len());
    let mut category_scores: BTreeMap<CategoryId, f64> = BTreeMap::new();
    for category in &categories {
        let tally = tallies.get(&category.id).copied().unwrap_or_default();
        let direct = direct_scores.get(&category.id).copied().unwrap_or(0.0);
        let mut bonus = bonuses.get(&category.id).copied().unwrap_or(0.0);
        if !bonus.is_finite() {
            error!(category_id = category.id, "non-finite bonus, degrading to zero");
            bonus = 0.0;
        }
        let total = (direct + bonus).clamp(0.0, 10.0);
        let percentage = if tally.max_possible > 0.0 {
            tally.raw_score / tally.max_possible * 100.0
        } else {
            0.0
        };

        rows.push(ScoreRow {
            assessment_id,
            category_id: category.id,
            raw_score: tally.raw_score,
            max_possible: tally.max_possible,
            question_count: tally.question_count,
            direct_score: direct,
            bonus_score: bonus,
            total_score: total,
            percentage_score: percentage,
            updated_at: now,
        });
        category_scores.insert(category.id, total);
    }

    let overall_score = overall(&category_scores);
    store.commit_scores(assessment_id, &rows, overall_score)?;
    debug!(assessment_id, overall_score, categories = rows.len(), "assessment scored");

    Ok(ScoringOutcome {
        overall_score,
        category_scores,
    })
}

/// Arithmetic mean of all total scores, rounded to two decimals. Zero when
/// there are no categories at all.
pub fn overall(category_scores: &BTreeMap<CategoryId, f64>) -> f64 {
    if category_scores.is_empty() {
        return 0.0;
    }
    let sum: f64 = category_scores.values().sum();
    round2(sum / category_scores.len() as f64)
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn zero_row(assessment_id: AssessmentId, category_id: CategoryId, now: DateTime<Utc>) -> ScoreRow {
    ScoreRow {
        assessment_id,
        category_id,
        raw_score: 0.0,
        max_possible: 0.0,
        question_count: 0,
        direct_score: 0.0,
        bonus_score: 0.0,
        total_score: 0.0,
        percentage_score: 0.0,
        updated_at: now,
    }
}
