use std::time::{Duration, SystemTime};

use deadpool_postgres::{Config, ManagerConfig, Pool, PoolConfig, RecyclingMethod, Runtime};
use prakriti_core::models::assessment::{Assessment, PersistedIn};
use tokio_postgres::NoTls;
use tokio_postgres::types::Json;
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::StorageError;
use crate::store::{AssessmentStore, BoxFuture};

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS assessments (
    id              UUID PRIMARY KEY,
    user_id         TEXT NOT NULL,
    dominant        TEXT NOT NULL,
    analysis_source TEXT NOT NULL,
    created_at      TIMESTAMPTZ NOT NULL,
    payload         JSONB NOT NULL
);
CREATE INDEX IF NOT EXISTS assessments_user_created_idx
    ON assessments (user_id, created_at DESC);
"#;

/// Connection settings for [`DurableStore`].
#[derive(Debug, Clone)]
pub struct DurableStoreConfig {
    pub url: String,
    pub pool_size: usize,
    /// Applied to pool checkout, connection setup and each statement.
    pub timeout: Duration,
}

/// PostgreSQL-backed assessment store.
///
/// The full assessment is kept as a JSONB payload next to the columns used
/// for lookup and ordering.
pub struct DurableStore {
    pool: Pool,
}

impl DurableStore {
    /// Build the connection pool. No connection is opened until first use.
    pub fn new(config: &DurableStoreConfig) -> Result<Self, StorageError> {
        let mut cfg = Config::new();
        cfg.url = Some(config.url.clone());
        cfg.connect_timeout = Some(config.timeout);
        cfg.options = Some(format!(
            "-c statement_timeout={}",
            config.timeout.as_millis()
        ));
        cfg.manager = Some(ManagerConfig {
            recycling_method: RecyclingMethod::Fast,
        });

        let mut pool_cfg = PoolConfig::new(config.pool_size);
        pool_cfg.timeouts.wait = Some(config.timeout);
        pool_cfg.timeouts.create = Some(config.timeout);
        pool_cfg.timeouts.recycle = Some(config.timeout);
        cfg.pool = Some(pool_cfg);

        let pool = cfg
            .create_pool(Some(Runtime::Tokio1), NoTls)
            .map_err(|e| StorageError::Unavailable(format!("pool creation failed: {e}")))?;

        info!(pool_size = config.pool_size, timeout = ?config.timeout, "durable store configured");
        Ok(Self { pool })
    }

    /// Create the `assessments` table and its index if they are missing.
    pub async fn ensure_schema(&self) -> Result<(), StorageError> {
        let client = self.client().await?;
        client
            .batch_execute(SCHEMA)
            .await
            .map_err(|e| StorageError::Query(format!("schema setup failed: {e}")))?;
        info!("assessments schema ready");
        Ok(())
    }

    async fn client(&self) -> Result<deadpool_postgres::Object, StorageError> {
        self.pool
            .get()
            .await
            .map_err(|e| StorageError::Unavailable(e.to_string()))
    }

    async fn insert(&self, assessment: &Assessment) -> Result<PersistedIn, StorageError> {
        let client = self.client().await?;
        let created_at = SystemTime::from(assessment.created_at);

        client
            .execute(
                r#"
                INSERT INTO assessments (id, user_id, dominant, analysis_source, created_at, payload)
                VALUES ($1, $2, $3, $4, $5, $6)
                "#,
                &[
                    &assessment.id,
                    &assessment.user_id,
                    &assessment.dominant.as_str(),
                    &assessment.analysis_source.as_str(),
                    &created_at,
                    &Json(assessment),
                ],
            )
            .await
            .map_err(|e| StorageError::Query(format!("insert failed: {e}")))?;

        debug!(assessment_id = %assessment.id, "assessment stored in database");
        Ok(PersistedIn::Durable)
    }

    async fn select_latest(&self, user_id: &str) -> Result<Assessment, StorageError> {
        let client = self.client().await?;
        let row = client
            .query_opt(
                r#"
                SELECT payload FROM assessments
                WHERE user_id = $1
                ORDER BY created_at DESC
                LIMIT 1
                "#,
                &[&user_id],
            )
            .await
            .map_err(|e| StorageError::Query(format!("select failed: {e}")))?;

        let row = row.ok_or_else(|| StorageError::NotFound {
            user_id: user_id.to_string(),
        })?;
        let Json(assessment): Json<Assessment> = row
            .try_get(0)
            .map_err(|e| StorageError::Query(format!("payload decode failed: {e}")))?;
        Ok(assessment)
    }

    async fn update_user_pointer(
        &self,
        user_id: &str,
        assessment_id: Uuid,
    ) -> Result<(), StorageError> {
        let client = self.client().await?;
        let updated = client
            .execute(
                "UPDATE users SET latest_assessment_id = $1 WHERE id::text = $2",
                &[&assessment_id, &user_id],
            )
            .await
            .map_err(|e| StorageError::Query(format!("user update failed: {e}")))?;

        if updated == 0 {
            debug!(user_id, "no user row to update");
        }
        Ok(())
    }
}

impl AssessmentStore for DurableStore {
    fn save<'a>(
        &'a self,
        assessment: &'a Assessment,
    ) -> BoxFuture<'a, Result<PersistedIn, StorageError>> {
        Box::pin(self.insert(assessment))
    }

    fn latest<'a>(&'a self, user_id: &'a str) -> BoxFuture<'a, Result<Assessment, StorageError>> {
        Box::pin(self.select_latest(user_id))
    }

    fn mark_latest<'a>(
        &'a self,
        user_id: &'a str,
        assessment_id: Uuid,
    ) -> BoxFuture<'a, Result<(), StorageError>> {
        Box::pin(self.update_user_pointer(user_id, assessment_id))
    }
}
