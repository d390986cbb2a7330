pub mod catalog;
pub mod score;
pub mod summary;

pub type AssessmentId = i64;
pub type CategoryId = i64;
pub type QuestionId = i64;
