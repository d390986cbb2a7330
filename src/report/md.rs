use crate::types::summary::AssessmentSummary;

pub fn to_markdown(summary: &AssessmentSummary) -> String {
    let mut output = String::new();
    output.push_str("# Assessment Report\n\n");
    output.push_str(&format!("Overall score: {:.2}\n\n", summary.overall_score));

    output.push_str("## Goal Scores\n\n");
    if summary.scores.is_empty() {
        output.push_str("- none\n\n");
    } else {
        for entry in &summary.scores {
            output.push_str(&format!(
                "- SDG {} {}: {:.2} (direct {:.2}, bonus {:.2}, {:.0}% of raw points)\n",
                entry.number,
                entry.name,
                entry.total_score,
                entry.direct_score,
                entry.bonus_score,
                entry.percentage_score
            ));
        }
        output.push('\n');
    }

    output.push_str("## Pillars\n\n");
    for pillar in &summary.pillars {
        output.push_str(&format!("- {}: {:.2}\n", pillar.pillar, pillar.average));
    }
    output.push('\n');

    output.push_str("## Strongest\n\n");
    for entry in &summary.top {
        output.push_str(&format!("- SDG {} {}: {:.2}\n", entry.number, entry.name, entry.total_score));
    }
    output.push('\n');

    output.push_str("## Weakest\n\n");
    for entry in &summary.bottom {
        output.push_str(&format!("- SDG {} {}: {:.2}\n", entry.number, entry.name, entry.total_score));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::summary::{PillarScore, SummaryEntry};

    fn entry(number: u32, total: f64) -> SummaryEntry {
        SummaryEntry {
            category_id: i64::from(number),
            number,
            name: format!("Goal {number}"),
            color: String::new(),
            direct_score: total,
            bonus_score: 0.0,
            total_score: total,
            percentage_score: 0.0,
        }
    }

    #[test]
    fn markdown_summary_contains_sections() {
        let summary = AssessmentSummary {
            assessment_id: 1,
            overall_score: 5.24,
            scores: vec![entry(1, 10.0), entry(2, 0.48)],
            pillars: vec![PillarScore {
                pillar: "People".to_string(),
                average: 5.24,
                categories: vec![1, 2, 3, 4, 5],
            }],
            top: vec![entry(1, 10.0)],
            bottom: vec![entry(2, 0.48)],
        };

        let rendered = to_markdown(&summary);
        assert!(rendered.contains("# Assessment Report"));
        assert!(rendered.contains("Overall score: 5.24"));
        assert!(rendered.contains("## Goal Scores"));
        assert!(rendered.contains("## Pillars"));
        assert!(rendered.contains("SDG 1 Goal 1: 10.00"));
    }
}
