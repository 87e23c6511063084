use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use prakriti_core::models::answer::Answer;
use prakriti_core::models::prediction::PredictionResult;
use tracing::{debug, info};

use crate::error::PredictError;
use crate::wire::{self, ClassifierHealth, PredictRequest};

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Anything that can classify a set of answers.
///
/// Implementations make a single attempt and report failure as a
/// [`PredictError`]; callers decide what to do about it. Dropping the
/// returned future abandons the call.
pub trait Classifier: Send + Sync {
    fn predict<'a>(
        &'a self,
        answers: &'a [Answer],
    ) -> BoxFuture<'a, Result<PredictionResult, PredictError>>;

    /// Probe the service. Classifiers without a health endpoint report
    /// themselves unavailable.
    fn health(&self) -> BoxFuture<'_, Result<ClassifierHealth, PredictError>> {
        Box::pin(async {
            Err(PredictError::Unavailable(
                "health probe not supported".to_string(),
            ))
        })
    }
}

/// HTTP client for the classifier service.
#[derive(Debug, Clone)]
pub struct HttpClassifier {
    http: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl HttpClassifier {
    /// Build a client whose every request is bounded by `timeout`.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, PredictError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| PredictError::Config(e.to_string()))?;

        let base_url = base_url.into().trim_end_matches('/').to_string();
        info!(base_url = %base_url, ?timeout, "classifier client configured");

        Ok(Self {
            http,
            base_url,
            timeout,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn send_predict(&self, answers: &[Answer]) -> Result<PredictionResult, PredictError> {
        let url = format!("{}/predict", self.base_url);
        debug!(url = %url, answers = answers.len(), "calling classifier");

        let response = self
            .http
            .post(&url)
            .json(&PredictRequest::from_answers(answers))
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        let body = response.bytes().await.map_err(|e| self.transport_error(e))?;

        if !status.is_success() {
            return Err(PredictError::Unavailable(format!(
                "classifier returned {status}: {}",
                wire::excerpt(&body)
            )));
        }

        let result = wire::decode_prediction(&body)?;
        debug!(
            predicted = %result.predicted,
            confidence = result.confidence,
            "classifier prediction received"
        );
        Ok(result)
    }

    async fn send_health(&self) -> Result<ClassifierHealth, PredictError> {
        let url = format!("{}/health", self.base_url);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        let body = response.bytes().await.map_err(|e| self.transport_error(e))?;

        if !status.is_success() {
            return Err(PredictError::Unavailable(format!(
                "health check returned {status}"
            )));
        }

        serde_json::from_slice(&body).map_err(|e| {
            PredictError::BadResponse(format!("{e}. Body: {}", wire::excerpt(&body)))
        })
    }

    fn transport_error(&self, e: reqwest::Error) -> PredictError {
        if e.is_timeout() {
            PredictError::Timeout(self.timeout)
        } else {
            PredictError::Unavailable(e.to_string())
        }
    }
}

impl Classifier for HttpClassifier {
    fn predict<'a>(
        &'a self,
        answers: &'a [Answer],
    ) -> BoxFuture<'a, Result<PredictionResult, PredictError>> {
        Box::pin(self.send_predict(answers))
    }

    fn health(&self) -> BoxFuture<'_, Result<ClassifierHealth, PredictError>> {
        Box::pin(self.send_health())
    }
}
