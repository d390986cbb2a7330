//! Reference data the engine consumes: goal catalog, questionnaire and the
//! inter-goal relationship graph. All of it is seed data, never mutated by a
//! scoring run.

use crate::types::{CategoryId, QuestionId};
use serde::{Deserialize, Serialize};

/// One scoring dimension (an SDG goal in the reference domain, 17 of them).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    /// Ordinal 1..N used for display ordering and pillar grouping.
    pub number: u32,
    pub name: String,
    /// Official campaign hex color, carried through to chart output.
    #[serde(default)]
    pub color: String,
}

/// How a question collects its answer; decides how the raw value is scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    /// Single choice; the selected option carries the score directly.
    Select,
    /// Multiple choice; selected option values are summed.
    Checklist,
    /// Free text; contributes no points.
    Text,
}

/// One selectable option of a question, with the points it is worth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerOption {
    pub key: String,
    #[serde(default = "default_option_value")]
    pub value: f64,
}

fn default_option_value() -> f64 {
    1.0
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub category_id: CategoryId,
    pub kind: QuestionKind,
    #[serde(default = "default_max_score")]
    pub max_score: f64,
    #[serde(default)]
    pub display_order: u32,
    /// Option catalog for select/checklist questions; empty for free text.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<AnswerOption>,
}

fn default_max_score() -> f64 {
    5.0
}

/// One answered question. The raw score has already been computed by the
/// response-scoring adapter; re-answering overwrites rather than duplicates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    pub question_id: QuestionId,
    pub raw_score: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Directed, weighted edge between two goals. Positive strength means synergy;
/// the bonus propagator ignores everything else. Self-loops and asymmetric
/// pairs are tolerated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Relationship {
    pub source: CategoryId,
    pub target: CategoryId,
    pub strength: f64,
}
