//! Scoring engine for SDG sustainability assessments.
//!
//! Raw per-question answers are tallied per goal, normalized to a 0-10 direct
//! score, enriched with cross-goal bonuses from a static relationship graph
//! and aggregated into one overall score. Persistence goes through the
//! [`store::AssessmentStore`] seam; [`store::MemoryStore`] is the reference
//! implementation used by the CLI and the test suite.

pub mod answers;
pub mod config;
pub mod dataset;
pub mod error;
pub mod report;
pub mod scoring;
pub mod seed;
pub mod store;
pub mod types;

pub use config::ScoringConstants;
pub use error::{Result, ScoringError};
pub use scoring::score_assessment;
pub use types::score::ScoringOutcome;
