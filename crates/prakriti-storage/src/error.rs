use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("no assessment found for user: {user_id}")]
    NotFound { user_id: String },

    #[error("store unavailable: {0}")]
    Unavailable(String),

    #[error("query failed: {0}")]
    Query(String),

    #[error("memory store is full ({capacity} assessments)")]
    CapacityExceeded { capacity: usize },
}

impl StorageError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, StorageError::NotFound { .. })
    }
}
