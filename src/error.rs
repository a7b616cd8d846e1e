use thiserror::Error;

#[derive(Error, Debug)]
pub enum TensegError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Genome length mismatch: expected {expected}, got {actual}")]
    GenomeLength { expected: usize, actual: usize },

    #[error("Evaluation error: {0}")]
    Evaluation(String),

    #[error("Model error: {0}")]
    Model(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serde error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TensegError>;
