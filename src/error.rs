use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScoringError {
    #[error("assessment not found: {0}")]
    AssessmentNotFound(i64),

    #[error("dataset file not found: {0}")]
    DatasetNotFound(String),

    #[error("dataset parse error: {0}")]
    DatasetParse(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("persistence failure: {0}")]
    Persistence(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ScoringError>;
