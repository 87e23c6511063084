#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use prakriti_core::models::answer::{Answer, RawAnswer};
use prakriti_core::models::assessment::{Assessment, PersistedIn};
use prakriti_core::models::dosha::Dosha;
use prakriti_core::models::prediction::PredictionResult;
use prakriti_intake::orchestrator::SubmissionOrchestrator;
use prakriti_intake::response::SubmissionRequest;
use prakriti_predict::client::{BoxFuture, Classifier};
use prakriti_predict::error::PredictError;
use prakriti_predict::wire::ClassifierHealth;
use prakriti_storage::error::StorageError;
use prakriti_storage::memory::MemoryStore;
use prakriti_storage::store::AssessmentStore;
use serde_json::json;
use tokio::sync::Notify;
use uuid::Uuid;

/// Classifier with a scripted outcome.
pub enum StubClassifier {
    Down,
    Predicts(PredictionResult),
    Hangs,
}

impl StubClassifier {
    pub fn predicts(predicted: Dosha, confidence: f64) -> Self {
        let rest = (1.0 - confidence) / 2.0;
        let probabilities = Dosha::ALL
            .into_iter()
            .map(|d| (d, if d == predicted { confidence } else { rest }))
            .collect::<BTreeMap<_, _>>();
        StubClassifier::Predicts(PredictionResult {
            predicted,
            confidence,
            probabilities,
            fallback: false,
        })
    }
}

impl Classifier for StubClassifier {
    fn predict<'a>(
        &'a self,
        _answers: &'a [Answer],
    ) -> BoxFuture<'a, Result<PredictionResult, PredictError>> {
        Box::pin(async move {
            match self {
                StubClassifier::Down => {
                    Err(PredictError::Unavailable("connection refused".to_string()))
                }
                StubClassifier::Predicts(p) => Ok(p.clone()),
                StubClassifier::Hangs => std::future::pending().await,
            }
        })
    }

    fn health(&self) -> BoxFuture<'_, Result<ClassifierHealth, PredictError>> {
        Box::pin(async move {
            match self {
                StubClassifier::Hangs => std::future::pending().await,
                StubClassifier::Down => {
                    Err(PredictError::Unavailable("connection refused".to_string()))
                }
                StubClassifier::Predicts(_) => Ok(ClassifierHealth {
                    status: "healthy".to_string(),
                    message: "ok".to_string(),
                    model_loaded: true,
                }),
            }
        })
    }
}

/// A durable-looking store backed by memory that records every call.
#[derive(Default)]
pub struct RecordingStore {
    pub inner: MemoryStore,
    pub saves: AtomicUsize,
    pub pointer_updates: AtomicUsize,
    pub fail_saves: bool,
    pub fail_pointer_updates: bool,
}

impl RecordingStore {
    pub fn failing() -> Self {
        Self {
            fail_saves: true,
            ..Self::default()
        }
    }

    pub fn saves(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    pub fn pointer_updates(&self) -> usize {
        self.pointer_updates.load(Ordering::SeqCst)
    }
}

impl AssessmentStore for RecordingStore {
    fn save<'a>(
        &'a self,
        assessment: &'a Assessment,
    ) -> BoxFuture<'a, Result<PersistedIn, StorageError>> {
        Box::pin(async move {
            self.saves.fetch_add(1, Ordering::SeqCst);
            if self.fail_saves {
                return Err(StorageError::Unavailable("database is down".to_string()));
            }
            self.inner.save(assessment).await?;
            Ok(PersistedIn::Durable)
        })
    }

    fn latest<'a>(&'a self, user_id: &'a str) -> BoxFuture<'a, Result<Assessment, StorageError>> {
        self.inner.latest(user_id)
    }

    fn mark_latest<'a>(
        &'a self,
        _user_id: &'a str,
        _assessment_id: Uuid,
    ) -> BoxFuture<'a, Result<(), StorageError>> {
        Box::pin(async move {
            self.pointer_updates.fetch_add(1, Ordering::SeqCst);
            if self.fail_pointer_updates {
                return Err(StorageError::Query("users table missing".to_string()));
            }
            Ok(())
        })
    }
}

/// A store whose writes wait until released.
#[derive(Default)]
pub struct GatedStore {
    pub inner: MemoryStore,
    pub started: Notify,
    pub release: Notify,
}

impl AssessmentStore for GatedStore {
    fn save<'a>(
        &'a self,
        assessment: &'a Assessment,
    ) -> BoxFuture<'a, Result<PersistedIn, StorageError>> {
        Box::pin(async move {
            self.started.notify_one();
            self.release.notified().await;
            self.inner.save(assessment).await
        })
    }

    fn latest<'a>(&'a self, user_id: &'a str) -> BoxFuture<'a, Result<Assessment, StorageError>> {
        self.inner.latest(user_id)
    }
}

pub fn orchestrator(
    classifier: StubClassifier,
    store: Arc<dyn AssessmentStore>,
) -> SubmissionOrchestrator {
    SubmissionOrchestrator::new(Arc::new(classifier), store, Duration::from_millis(200))
}

pub fn raw(question_id: &str, dosha: &str, weight: f64) -> RawAnswer {
    RawAnswer {
        question_id: Some(question_id.to_string()),
        option_id: Some("a".to_string()),
        dosha: Some(dosha.to_string()),
        category: None,
        weight: Some(json!(weight)),
    }
}

pub fn raw_wellness(question_id: &str, weight: f64) -> RawAnswer {
    RawAnswer {
        question_id: Some(question_id.to_string()),
        option_id: Some("a".to_string()),
        dosha: None,
        category: Some("wellness".to_string()),
        weight: Some(json!(weight)),
    }
}

/// vata 3, pitta 1, kapha 1.
pub fn vata_heavy(user_id: &str) -> SubmissionRequest {
    SubmissionRequest {
        user_id: user_id.to_string(),
        answers: vec![
            raw("q1", "vata", 3.0),
            raw("q2", "pitta", 1.0),
            raw("q3", "kapha", 1.0),
        ],
    }
}
