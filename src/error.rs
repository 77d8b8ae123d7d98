use thiserror::Error;

#[derive(Error, Debug)]
pub enum BreakError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("No Training Data: corpus produced no quadgram observations")]
    NoTrainingData,

    #[error("Data Validation Error: {0}")]
    Validation(String),
}

pub type BreakResult<T> = Result<T, BreakError>;
