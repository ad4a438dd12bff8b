use thiserror::Error;

/// Errors emitted by the generation engine and export writers.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("unknown type: {0}")]
    UnknownType(String),
    #[error("count must be between {min} and {max}, got {count}")]
    InvalidCount { count: i64, min: i64, max: i64 },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

impl From<fixturegen_core::Error> for GenerationError {
    fn from(err: fixturegen_core::Error) -> Self {
        match err {
            fixturegen_core::Error::UnknownType(id) => GenerationError::UnknownType(id),
        }
    }
}
