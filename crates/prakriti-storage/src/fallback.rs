use std::sync::Arc;

use prakriti_core::models::assessment::{Assessment, PersistedIn};
use tracing::{error, warn};
use uuid::Uuid;

use crate::error::StorageError;
use crate::store::{AssessmentStore, BoxFuture};

/// Writes to `primary`, and to `fallback` when the primary write fails.
///
/// Reads go to the primary only: an assessment absorbed by the fallback is
/// not returned by [`AssessmentStore::latest`] on this store.
pub struct FallbackStore {
    primary: Arc<dyn AssessmentStore>,
    fallback: Arc<dyn AssessmentStore>,
}

impl FallbackStore {
    pub fn new(primary: Arc<dyn AssessmentStore>, fallback: Arc<dyn AssessmentStore>) -> Self {
        Self { primary, fallback }
    }

    pub fn primary(&self) -> &Arc<dyn AssessmentStore> {
        &self.primary
    }

    pub fn fallback(&self) -> &Arc<dyn AssessmentStore> {
        &self.fallback
    }
}

impl AssessmentStore for FallbackStore {
    fn save<'a>(
        &'a self,
        assessment: &'a Assessment,
    ) -> BoxFuture<'a, Result<PersistedIn, StorageError>> {
        Box::pin(async move {
            let primary_err = match self.primary.save(assessment).await {
                Ok(persisted) => return Ok(persisted),
                Err(e) => e,
            };

            warn!(
                assessment_id = %assessment.id,
                user_id = %assessment.user_id,
                error = %primary_err,
                "primary store write failed, using fallback store"
            );

            match self.fallback.save(assessment).await {
                Ok(persisted) => {
                    warn!(
                        assessment_id = %assessment.id,
                        "assessment held in fallback store only; it will be lost on restart"
                    );
                    Ok(persisted)
                }
                Err(e) => {
                    error!(
                        assessment_id = %assessment.id,
                        primary_error = %primary_err,
                        fallback_error = %e,
                        "both stores rejected the assessment"
                    );
                    Err(e)
                }
            }
        })
    }

    fn latest<'a>(&'a self, user_id: &'a str) -> BoxFuture<'a, Result<Assessment, StorageError>> {
        self.primary.latest(user_id)
    }

    fn mark_latest<'a>(
        &'a self,
        user_id: &'a str,
        assessment_id: Uuid,
    ) -> BoxFuture<'a, Result<(), StorageError>> {
        self.primary.mark_latest(user_id, assessment_id)
    }
}
