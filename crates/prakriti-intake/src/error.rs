use prakriti_predict::error::PredictError;
use prakriti_scoring::error::ScoringError;
use prakriti_storage::error::StorageError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IntakeError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Neither the durable nor the memory store accepted the assessment.
    #[error("assessment could not be stored: {0}")]
    StoreFatal(#[source] StorageError),

    #[error("no assessment found for user: {0}")]
    NotFound(String),

    #[error("storage error: {0}")]
    Storage(#[source] StorageError),
}

impl From<ScoringError> for IntakeError {
    fn from(e: ScoringError) -> Self {
        match e {
            ScoringError::InvalidInput(msg) => IntakeError::InvalidInput(msg),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {key}={value:?}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },

    #[error("classifier client: {0}")]
    Classifier(#[from] PredictError),

    #[error("durable store: {0}")]
    Store(#[from] StorageError),
}
