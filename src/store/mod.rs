pub mod memory;

pub use memory::MemoryStore;

use crate::error::Result;
use crate::types::catalog::{Category, Question, Relationship, Response};
use crate::types::score::ScoreRow;
use crate::types::AssessmentId;

/// Persistence seam between the scoring engine and whatever actually holds the
/// data. The read side mirrors the catalog shapes one-to-one; the write side is
/// a single atomic commit so a failed run can never leave a mix of old and new
/// score rows behind.
pub trait AssessmentStore {
    fn assessment_exists(&self, assessment_id: AssessmentId) -> bool;

    fn categories(&self) -> Vec<Category>;

    fn questions(&self) -> Vec<Question>;

    fn responses(&self, assessment_id: AssessmentId) -> Vec<Response>;

    fn relationships(&self) -> Vec<Relationship>;

    /// Upserts every row keyed by (assessment, category) and updates the
    /// assessment's overall score, all or nothing. Implementations must not
    /// apply any row if the commit fails partway.
    fn commit_scores(
        &mut self,
        assessment_id: AssessmentId,
        rows: &[ScoreRow],
        overall_score: f64,
    ) -> Result<()>;

    /// Persisted rows for one assessment, ordered by category id.
    fn score_rows(&self, assessment_id: AssessmentId) -> Vec<ScoreRow>;

    fn overall_score(&self, assessment_id: AssessmentId) -> Option<f64>;
}
