use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScoringError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}
