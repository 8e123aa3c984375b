use thiserror::Error;

pub type Result<T> = std::result::Result<T, PortfolioError>;

#[derive(Debug, Error)]
pub enum PortfolioError {
    #[error("Invalid submission state transition from {from} to {to}")]
    InvalidSubmissionTransition { from: String, to: String },

    #[error("Submission failed: {0}")]
    SubmissionFailed(String),

    #[error("Unknown site section: {0}")]
    InvalidSection(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}
