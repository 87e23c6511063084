use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use prakriti_core::models::answer::Answer;
use prakriti_core::models::assessment::{Assessment, PersistedIn};
use prakriti_core::models::prediction::PredictionResult;
use prakriti_predict::client::Classifier;
use prakriti_predict::error::PredictError;
use prakriti_predict::wire::ClassifierHealth;
use prakriti_scoring::{accumulate, fusion, recommend, validate, wellness};
use prakriti_storage::error::StorageError;
use prakriti_storage::store::AssessmentStore;
use tracing::{Instrument, Span, debug, info, info_span, warn};
use uuid::Uuid;

use crate::error::IntakeError;
use crate::response::{SubmissionRequest, SubmissionResponse};

/// Where a submission is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Validating,
    Scoring,
    Predicting,
    Fusing,
    Persisting,
    Done,
    Failed,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Validating => "validating",
            Stage::Scoring => "scoring",
            Stage::Predicting => "predicting",
            Stage::Fusing => "fusing",
            Stage::Persisting => "persisting",
            Stage::Done => "done",
            Stage::Failed => "failed",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Runs submissions against an injected classifier and store.
///
/// Each submission is independent; the orchestrator holds no per-request
/// state and can be shared across tasks.
pub struct SubmissionOrchestrator {
    classifier: Arc<dyn Classifier>,
    store: Arc<dyn AssessmentStore>,
    predict_timeout: Duration,
}

impl SubmissionOrchestrator {
    pub fn new(
        classifier: Arc<dyn Classifier>,
        store: Arc<dyn AssessmentStore>,
        predict_timeout: Duration,
    ) -> Self {
        Self {
            classifier,
            store,
            predict_timeout,
        }
    }

    /// Score, classify and persist one submission.
    ///
    /// Fails only on invalid input or when no store accepts the assessment.
    /// A classifier failure degrades to the rule-based result; a durable
    /// store failure degrades to the memory store.
    pub async fn submit(
        &self,
        request: SubmissionRequest,
    ) -> Result<SubmissionResponse, IntakeError> {
        let submission_id = Uuid::new_v4();
        let span = info_span!(
            "submission",
            submission_id = %submission_id,
            user_id = %request.user_id
        );
        self.run(submission_id, request).instrument(span).await
    }

    async fn run(
        &self,
        submission_id: Uuid,
        request: SubmissionRequest,
    ) -> Result<SubmissionResponse, IntakeError> {
        enter(submission_id, Stage::Validating);
        let user_id = request.user_id.trim().to_string();
        if user_id.is_empty() {
            enter(submission_id, Stage::Failed);
            return Err(IntakeError::InvalidInput("userId is required".to_string()));
        }
        let answers = validate::validate(&request.answers).inspect_err(|_| {
            enter(submission_id, Stage::Failed);
        })?;

        enter(submission_id, Stage::Scoring);
        let profile = accumulate::accumulate(&answers);
        let wellness = wellness::score(&answers);

        enter(submission_id, Stage::Predicting);
        let prediction = self.predict(&answers).await;

        enter(submission_id, Stage::Fusing);
        let fused = fusion::fuse(&profile, prediction);

        let assessment = Assessment {
            id: submission_id,
            user_id,
            answers,
            trait_scores: profile.scores,
            scores: fused.percent,
            dominant: fused.dominant,
            secondary: fused.secondary,
            wellness,
            prediction: fused.prediction,
            analysis_source: fused.source,
            confidence: fused.confidence,
            created_at: jiff::Timestamp::now(),
        };

        enter(submission_id, Stage::Persisting);
        let persisted = self.persist(&assessment).await.inspect_err(|_| {
            enter(submission_id, Stage::Failed);
        })?;

        enter(submission_id, Stage::Done);
        info!(
            dominant = %assessment.dominant,
            analysis_source = assessment.analysis_source.as_str(),
            confidence = assessment.confidence,
            wellness = assessment.wellness.score,
            ?persisted,
            "submission complete"
        );

        Ok(SubmissionResponse {
            success: true,
            assessment_id: assessment.id,
            scores: assessment.scores,
            trait_scores: assessment.trait_scores,
            dominant: assessment.dominant,
            secondary: assessment.secondary,
            recommendations: recommend::lookup(assessment.dominant).clone(),
            wellness: assessment.wellness,
            analysis_source: assessment.analysis_source,
            confidence: assessment.confidence,
            persisted,
        })
    }

    async fn predict(&self, answers: &[Answer]) -> Result<PredictionResult, PredictError> {
        match tokio::time::timeout(self.predict_timeout, self.classifier.predict(answers)).await {
            Ok(result) => result,
            Err(_) => Err(PredictError::Timeout(self.predict_timeout)),
        }
    }

    /// The write runs on its own task so that dropping the submission
    /// future does not abandon it half way.
    async fn persist(&self, assessment: &Assessment) -> Result<PersistedIn, IntakeError> {
        let store = Arc::clone(&self.store);
        let assessment = assessment.clone();

        let task = tokio::spawn(
            async move {
                let persisted = store.save(&assessment).await?;
                match persisted {
                    PersistedIn::Durable => {
                        if let Err(e) = store.mark_latest(&assessment.user_id, assessment.id).await
                        {
                            warn!(error = %e, "could not update latest assessment pointer");
                        }
                    }
                    PersistedIn::Memory => {
                        warn!("assessment persisted in memory only");
                    }
                }
                Ok::<_, StorageError>(persisted)
            }
            .instrument(Span::current()),
        );

        match task.await {
            Ok(result) => result.map_err(IntakeError::StoreFatal),
            Err(e) => Err(IntakeError::StoreFatal(StorageError::Unavailable(format!(
                "persist task failed: {e}"
            )))),
        }
    }

    /// Most recent assessment for `user_id`.
    pub async fn latest(&self, user_id: &str) -> Result<Assessment, IntakeError> {
        let user_id = user_id.trim();
        if user_id.is_empty() {
            return Err(IntakeError::InvalidInput("userId is required".to_string()));
        }
        self.store.latest(user_id).await.map_err(|e| {
            if e.is_not_found() {
                IntakeError::NotFound(user_id.to_string())
            } else {
                IntakeError::Storage(e)
            }
        })
    }

    /// Probe the classifier, bounded by the prediction timeout.
    pub async fn classifier_health(&self) -> Result<ClassifierHealth, PredictError> {
        match tokio::time::timeout(self.predict_timeout, self.classifier.health()).await {
            Ok(result) => result,
            Err(_) => Err(PredictError::Timeout(self.predict_timeout)),
        }
    }
}

fn enter(submission_id: Uuid, stage: Stage) {
    debug!(%submission_id, stage = stage.as_str(), "submission stage");
}
