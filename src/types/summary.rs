//! Read-model for presenting a scored assessment: ordered per-goal rows,
//! pillar averages and the best/worst performers.

use crate::types::CategoryId;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryEntry {
    pub category_id: CategoryId,
    pub number: u32,
    pub name: String,
    pub color: String,
    pub direct_score: f64,
    pub bonus_score: f64,
    pub total_score: f64,
    pub percentage_score: f64,
}

/// Average total score over one of the classic SDG pillar groupings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PillarScore {
    pub pillar: String,
    pub average: f64,
    pub categories: Vec<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssessmentSummary {
    pub assessment_id: i64,
    pub overall_score: f64,
    pub scores: Vec<SummaryEntry>,
    pub pillars: Vec<PillarScore>,
    /// Up to three strongest goals, best first.
    pub top: Vec<SummaryEntry>,
    /// Up to three weakest goals, worst first.
    pub bottom: Vec<SummaryEntry>,
}
