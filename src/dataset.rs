//! JSON dataset files: the serialized form of a catalog plus assessments that
//! the CLI loads into a [`MemoryStore`] before scoring.

use crate::answers::{score_answer, AnswerValue};
use crate::error::{Result, ScoringError};
use crate::seed;
use crate::store::MemoryStore;
use crate::types::catalog::{Category, Question, Relationship, Response};
use crate::types::{AssessmentId, QuestionId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub questions: Vec<Question>,
    #[serde(default)]
    pub relationships: Vec<Relationship>,
    #[serde(default)]
    pub assessments: Vec<AssessmentData>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentData {
    pub id: AssessmentId,
    #[serde(default)]
    pub responses: Vec<ResponseInput>,
}

/// One answer in a dataset file. Either an already-scored raw value or the
/// submitted payload, which gets scored through the answer adapter when the
/// dataset is loaded. An explicit raw score wins when both are present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseInput {
    pub question_id: QuestionId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer: Option<AnswerValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl Dataset {
    /// The reference catalog with an empty questionnaire, ready to be filled
    /// in for a concrete project.
    pub fn seed() -> Self {
        Self {
            categories: seed::categories(),
            questions: Vec::new(),
            relationships: seed::relationships(),
            assessments: Vec::new(),
        }
    }

    pub fn into_store(self) -> MemoryStore {
        let questions_by_id: HashMap<QuestionId, Question> = self
            .questions
            .iter()
            .map(|question| (question.id, question.clone()))
            .collect();
        let mut store = MemoryStore::new(self.categories, self.questions, self.relationships);
        for assessment in self.assessments {
            store.add_assessment(assessment.id);
            for input in assessment.responses {
                let raw_score = match (input.raw_score, &input.answer) {
                    (Some(raw), _) => raw,
                    (None, Some(answer)) => questions_by_id
                        .get(&input.question_id)
                        .map(|question| {
                            score_answer(
                                question.kind,
                                answer,
                                &question.options,
                                question.max_score,
                            )
                        })
                        // Unknown question; the tally step logs and skips it.
                        .unwrap_or(0.0),
                    (None, None) => 0.0,
                };
                store.record_response(
                    assessment.id,
                    Response {
                        question_id: input.question_id,
                        raw_score,
                        note: input.note,
                    },
                );
            }
        }
        store
    }
}

pub fn load_dataset(path: &Path) -> Result<Dataset> {
    if !path.exists() {
        return Err(ScoringError::DatasetNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    serde_json::from_str(&content)
        .map_err(|e| ScoringError::DatasetParse(format!("{}: {}", path.display(), e)))
}

pub fn write_dataset(path: &Path, dataset: &Dataset) -> Result<()> {
    let rendered = serde_json::to_string_pretty(dataset)?;
    std::fs::write(path, rendered)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::AssessmentStore;
    use crate::types::catalog::{AnswerOption, QuestionKind};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn load_rejects_missing_file() {
        let dir = TempDir::new().expect("temp dir should be created");
        let err = load_dataset(&dir.path().join("missing.json"))
            .expect_err("missing file should fail");
        assert!(matches!(err, ScoringError::DatasetNotFound(_)));
    }

    #[test]
    fn load_rejects_malformed_json() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("bad.json");
        fs::write(&path, "{ categories: nope").expect("file should write");
        let err = load_dataset(&path).expect_err("malformed file should fail");
        assert!(matches!(err, ScoringError::DatasetParse(_)));
    }

    #[test]
    fn seed_round_trips_through_disk() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("seed.json");
        write_dataset(&path, &Dataset::seed()).expect("seed should write");

        let loaded = load_dataset(&path).expect("seed should load");
        assert_eq!(loaded.categories.len(), 17);
        assert!(loaded.relationships.len() > 60);
        assert!(loaded.questions.is_empty());
    }

    fn one_goal_dataset(responses: Vec<ResponseInput>) -> Dataset {
        Dataset {
            categories: vec![Category {
                id: 1,
                number: 1,
                name: "No Poverty".to_string(),
                color: String::new(),
            }],
            questions: vec![Question {
                id: 10,
                category_id: 1,
                kind: QuestionKind::Checklist,
                max_score: 5.0,
                display_order: 1,
                options: vec![
                    AnswerOption {
                        key: "insulation".to_string(),
                        value: 2.0,
                    },
                    AnswerOption {
                        key: "solar".to_string(),
                        value: 2.0,
                    },
                ],
            }],
            relationships: vec![],
            assessments: vec![AssessmentData {
                id: 3,
                responses,
            }],
        }
    }

    #[test]
    fn dataset_assessments_land_in_the_store() {
        let dataset = one_goal_dataset(vec![ResponseInput {
            question_id: 10,
            raw_score: Some(4.0),
            answer: None,
            note: None,
        }]);

        let store = dataset.into_store();
        assert!(store.assessment_exists(3));
        let responses = store.responses(3);
        assert_eq!(responses.len(), 1);
        assert_eq!(responses[0].raw_score, 4.0);
    }

    #[test]
    fn answer_payloads_are_scored_through_the_adapter() {
        let dataset = one_goal_dataset(vec![ResponseInput {
            question_id: 10,
            raw_score: None,
            answer: Some(AnswerValue::Selections(vec![
                "insulation".to_string(),
                "solar".to_string(),
                "unlisted".to_string(),
            ])),
            note: None,
        }]);

        let store = dataset.into_store();
        // 2.0 + 2.0 + 1.0 fallback for the unlisted key.
        assert_eq!(store.responses(3)[0].raw_score, 5.0);
    }

    #[test]
    fn answer_for_unknown_question_loads_as_zero() {
        let dataset = one_goal_dataset(vec![ResponseInput {
            question_id: 999,
            raw_score: None,
            answer: Some(AnswerValue::Token("yes".to_string())),
            note: None,
        }]);

        let store = dataset.into_store();
        assert_eq!(store.responses(3)[0].raw_score, 0.0);
    }
}
