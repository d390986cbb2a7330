//! In-memory reference implementation of [`AssessmentStore`]. Backs the CLI
//! (datasets are loaded into it before scoring) and the test suite.

use crate::error::{Result, ScoringError};
use crate::store::AssessmentStore;
use crate::types::catalog::{Category, Question, Relationship, Response};
use crate::types::score::ScoreRow;
use crate::types::{AssessmentId, CategoryId, QuestionId};
use std::collections::BTreeMap;

#[derive(Debug, Default)]
pub struct MemoryStore {
    categories: Vec<Category>,
    questions: Vec<Question>,
    relationships: Vec<Relationship>,
    // One response per (assessment, question); re-answering overwrites.
    responses: BTreeMap<AssessmentId, BTreeMap<QuestionId, Response>>,
    overall_scores: BTreeMap<AssessmentId, f64>,
    scores: BTreeMap<(AssessmentId, CategoryId), ScoreRow>,
    fail_next_commit: bool,
}

impl MemoryStore {
    pub fn new(
        categories: Vec<Category>,
        questions: Vec<Question>,
        relationships: Vec<Relationship>,
    ) -> Self {
        Self {
            categories,
            questions,
            relationships,
            ..Self::default()
        }
    }

    /// Registers an assessment with no responses yet.
    pub fn add_assessment(&mut self, assessment_id: AssessmentId) {
        self.responses.entry(assessment_id).or_default();
    }

    /// Records or overwrites the answer to one question.
    pub fn record_response(&mut self, assessment_id: AssessmentId, response: Response) {
        self.responses
            .entry(assessment_id)
            .or_default()
            .insert(response.question_id, response);
    }

    /// Makes the next `commit_scores` call fail without applying anything.
    /// Used by tests to verify commit atomicity.
    pub fn fail_next_commit(&mut self) {
        self.fail_next_commit = true;
    }
}

impl AssessmentStore for MemoryStore {
    fn assessment_exists(&self, assessment_id: AssessmentId) -> bool {
        self.responses.contains_key(&assessment_id)
    }

    fn categories(&self) -> Vec<Category> {
        self.categories.clone()
    }

    fn questions(&self) -> Vec<Question> {
        self.questions.clone()
    }

    fn responses(&self, assessment_id: AssessmentId) -> Vec<Response> {
        self.responses
            .get(&assessment_id)
            .map(|by_question| by_question.values().cloned().collect())
            .unwrap_or_default()
    }

    fn relationships(&self) -> Vec<Relationship> {
        self.relationships.clone()
    }

    fn commit_scores(
        &mut self,
        assessment_id: AssessmentId,
        rows: &[ScoreRow],
        overall_score: f64,
    ) -> Result<()> {
        if self.fail_next_commit {
            self.fail_next_commit = false;
            return Err(ScoringError::Persistence(
                "injected commit failure".to_string(),
            ));
        }
        if !self.responses.contains_key(&assessment_id) {
            return Err(ScoringError::Persistence(format!(
                "commit for unregistered assessment {assessment_id}"
            )));
        }

        // All checks passed; from here every write applies.
        for row in rows {
            self.scores
                .insert((assessment_id, row.category_id), row.clone());
        }
        self.overall_scores.insert(assessment_id, overall_score);
        Ok(())
    }

    fn score_rows(&self, assessment_id: AssessmentId) -> Vec<ScoreRow> {
        self.scores
            .range((assessment_id, CategoryId::MIN)..=(assessment_id, CategoryId::MAX))
            .map(|(_, row)| row.clone())
            .collect()
    }

    fn overall_score(&self, assessment_id: AssessmentId) -> Option<f64> {
        self.overall_scores.get(&assessment_id).copied()
    }
}
