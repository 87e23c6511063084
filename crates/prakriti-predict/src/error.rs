use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PredictError {
    #[error("classifier did not answer within {0:?}")]
    Timeout(Duration),

    #[error("classifier unavailable: {0}")]
    Unavailable(String),

    #[error("classifier response not understood: {0}")]
    BadResponse(String),

    #[error("HTTP client config error: {0}")]
    Config(String),
}
