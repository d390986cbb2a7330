//! Engine output types.

use crate::types::{AssessmentId, CategoryId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-category accumulation of raw response points, produced by the tally
/// step before any normalization.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CategoryTally {
    pub raw_score: f64,
    pub max_possible: f64,
    pub question_count: u32,
}

/// One persisted score record, keyed by (assessment, category). Overwritten in
/// place on every recalculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreRow {
    pub assessment_id: AssessmentId,
    pub category_id: CategoryId,
    pub raw_score: f64,
    pub max_possible: f64,
    pub question_count: u32,
    /// Normalized 0-10 score from the category's own responses.
    pub direct_score: f64,
    /// Cross-category synergy credit, 0 to the configured cap.
    pub bonus_score: f64,
    /// direct + bonus, clamped to [0, 10].
    pub total_score: f64,
    /// raw / max * 100, or 0 when the category has no answerable points.
    pub percentage_score: f64,
    pub updated_at: DateTime<Utc>,
}

/// What `score_assessment` hands back to the caller once persistence succeeded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoringOutcome {
    pub overall_score: f64,
    /// total_score per category, ordered by category id.
    pub category_scores: BTreeMap<CategoryId, f64>,
}

impl ScoringOutcome {
    pub fn empty() -> Self {
        Self {
            overall_score: 0.0,
            category_scores: BTreeMap::new(),
        }
    }
}
