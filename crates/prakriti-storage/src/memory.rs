use std::collections::HashMap;

use prakriti_core::models::assessment::{Assessment, PersistedIn};
use tokio::sync::Mutex;
use tracing::debug;
use uuid::Uuid;

use crate::error::StorageError;
use crate::store::{AssessmentStore, BoxFuture};

/// In-process assessment store. Contents live as long as the value does and
/// are lost on restart.
///
/// Safe to share between concurrent submissions; every access goes through
/// one async mutex.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<Uuid, Assessment>>,
    capacity: Option<usize>,
}

impl MemoryStore {
    /// An unbounded store.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that refuses writes once it holds `capacity` assessments.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            capacity: Some(capacity),
        }
    }

    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.lock().await.is_empty()
    }

    pub async fn get(&self, id: Uuid) -> Option<Assessment> {
        self.entries.lock().await.get(&id).cloned()
    }
}

impl AssessmentStore for MemoryStore {
    fn save<'a>(
        &'a self,
        assessment: &'a Assessment,
    ) -> BoxFuture<'a, Result<PersistedIn, StorageError>> {
        Box::pin(async move {
            let mut entries = self.entries.lock().await;
            if let Some(capacity) = self.capacity
                && entries.len() >= capacity
                && !entries.contains_key(&assessment.id)
            {
                return Err(StorageError::CapacityExceeded { capacity });
            }
            entries.insert(assessment.id, assessment.clone());
            debug!(assessment_id = %assessment.id, held = entries.len(), "assessment stored in memory");
            Ok(PersistedIn::Memory)
        })
    }

    fn latest<'a>(&'a self, user_id: &'a str) -> BoxFuture<'a, Result<Assessment, StorageError>> {
        Box::pin(async move {
            let entries = self.entries.lock().await;
            entries
                .values()
                .filter(|a| a.user_id == user_id)
                .max_by_key(|a| a.created_at)
                .cloned()
                .ok_or_else(|| StorageError::NotFound {
                    user_id: user_id.to_string(),
                })
        })
    }
}
