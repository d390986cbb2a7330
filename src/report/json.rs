use crate::types::summary::AssessmentSummary;

pub fn to_json(summary: &AssessmentSummary) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(summary)
}
