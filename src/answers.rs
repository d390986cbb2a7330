//! Response-scoring adapter: turns a submitted answer payload into the bounded
//! raw point value a question contributes.
//!
//! Option tokens map to points through a closed lookup table. Anything not in
//! the table but non-empty is worth the documented default of 1.0, so a newly
//! added checkbox value counts as engagement instead of silently scoring zero.

use crate::types::catalog::{AnswerOption, QuestionKind};
use serde::{Deserialize, Serialize};

/// Default points for a non-empty token the lookup table does not know.
pub const UNRECOGNIZED_TOKEN_SCORE: f64 = 1.0;

/// The payload a participant submitted for one question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerValue {
    /// Single selected option or scale pick.
    Token(String),
    /// Checklist selections.
    Selections(Vec<String>),
    /// Free text, never worth points.
    Text(String),
}

/// Maps a single option token to points.
///
/// Numeric strings parse directly; Likert and yes/no families come from the
/// closed table below; unrecognized non-empty tokens fall back to
/// [`UNRECOGNIZED_TOKEN_SCORE`]; empty tokens are worth nothing.
pub fn option_value(token: &str) -> f64 {
    let trimmed = token.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    if let Ok(numeric) = trimmed.parse::<f64>() {
        return numeric;
    }
    match trimmed.to_lowercase().as_str() {
        "strongly agree" | "excellent" | "very high" | "always" => 5.0,
        "agree" | "good" | "high" | "often" => 4.0,
        "neutral" | "moderate" | "medium" | "sometimes" => 3.0,
        "disagree" | "poor" | "low" | "rarely" => 2.0,
        "strongly disagree" | "very poor" | "very low" | "never" => 1.0,
        "yes" | "true" | "y" => 5.0,
        "partially" | "somewhat" | "in progress" => 3.0,
        "no" | "false" | "n" => 0.0,
        _ => UNRECOGNIZED_TOKEN_SCORE,
    }
}

/// Scores one answer against its question, never exceeding `max_score`.
pub fn score_answer(
    kind: QuestionKind,
    answer: &AnswerValue,
    options: &[AnswerOption],
    max_score: f64,
) -> f64 {
    let score = match (kind, answer) {
        (QuestionKind::Select, AnswerValue::Token(token)) => option_value(token),
        (QuestionKind::Checklist, AnswerValue::Selections(selected)) => selected
            .iter()
            .map(|key| {
                options
                    .iter()
                    .find(|option| option.key == *key)
                    .map(|option| option.value)
                    .unwrap_or(UNRECOGNIZED_TOKEN_SCORE)
            })
            .sum(),
        (QuestionKind::Text, _) => 0.0,
        // Payload shape does not match the question type.
        _ => 0.0,
    };
    // A malformed catalog could carry a negative max; keep the bounds sane.
    score.max(0.0).min(max_score.max(0.0))
}
