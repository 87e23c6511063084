use std::future::Future;
use std::pin::Pin;

use prakriti_core::models::assessment::{Assessment, PersistedIn};
use uuid::Uuid;

use crate::error::StorageError;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Append-only assessment persistence.
///
/// Every `save` is a new row; there is no deduplication and no update.
pub trait AssessmentStore: Send + Sync {
    /// Persist one assessment. Reports which backend absorbed the write.
    fn save<'a>(
        &'a self,
        assessment: &'a Assessment,
    ) -> BoxFuture<'a, Result<PersistedIn, StorageError>>;

    /// Most recent assessment for `user_id` by `created_at`.
    fn latest<'a>(&'a self, user_id: &'a str) -> BoxFuture<'a, Result<Assessment, StorageError>>;

    /// Point the user record at its newest assessment. Stores without a
    /// user record accept and ignore this.
    fn mark_latest<'a>(
        &'a self,
        _user_id: &'a str,
        _assessment_id: Uuid,
    ) -> BoxFuture<'a, Result<(), StorageError>> {
        Box::pin(async { Ok(()) })
    }
}
