use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use prakriti_predict::client::HttpClassifier;
use prakriti_storage::fallback::FallbackStore;
use prakriti_storage::memory::MemoryStore;
use prakriti_storage::postgres::{DurableStore, DurableStoreConfig};
use tracing::{info, warn};

use crate::error::ConfigError;
use crate::orchestrator::SubmissionOrchestrator;

pub const DEFAULT_ML_SERVICE_URL: &str = "http://localhost:8000";
pub const DEFAULT_DATABASE_URL: &str = "postgres://postgres@localhost:5432/prakriti";
pub const DEFAULT_PREDICT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_DB_POOL_SIZE: usize = 8;
pub const DEFAULT_DB_TIMEOUT_SECS: u64 = 5;
pub const DEFAULT_MEMORY_STORE_CAPACITY: usize = 10_000;

/// Runtime settings, read from the environment.
#[derive(Debug, Clone, PartialEq)]
pub struct IntakeConfig {
    pub ml_service_url: String,
    /// Bound on a single classifier call.
    pub predict_timeout: Duration,
    pub database_url: String,
    pub db_pool_size: usize,
    /// Pool checkout, connect and statement timeout.
    pub db_timeout: Duration,
    /// `None` means the memory store is unbounded.
    pub memory_store_capacity: Option<usize>,
}

impl Default for IntakeConfig {
    fn default() -> Self {
        Self {
            ml_service_url: DEFAULT_ML_SERVICE_URL.to_string(),
            predict_timeout: Duration::from_secs(DEFAULT_PREDICT_TIMEOUT_SECS),
            database_url: DEFAULT_DATABASE_URL.to_string(),
            db_pool_size: DEFAULT_DB_POOL_SIZE,
            db_timeout: Duration::from_secs(DEFAULT_DB_TIMEOUT_SECS),
            memory_store_capacity: Some(DEFAULT_MEMORY_STORE_CAPACITY),
        }
    }
}

impl IntakeConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Missing keys take their defaults; present
    /// keys must be valid.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let ml_service_url = lookup("ML_SERVICE_URL")
            .unwrap_or_else(|| DEFAULT_ML_SERVICE_URL.to_string());
        if !(ml_service_url.starts_with("http://") || ml_service_url.starts_with("https://")) {
            return Err(invalid(
                "ML_SERVICE_URL",
                &ml_service_url,
                "expected an http:// or https:// URL",
            ));
        }

        let database_url =
            lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());
        if database_url.trim().is_empty() {
            return Err(invalid("DATABASE_URL", &database_url, "must not be empty"));
        }

        let predict_secs = parse_in_range(
            &lookup,
            "PREDICT_TIMEOUT_SECS",
            DEFAULT_PREDICT_TIMEOUT_SECS,
            1..=60,
        )?;
        let db_pool_size = parse_in_range(&lookup, "DB_POOL_SIZE", DEFAULT_DB_POOL_SIZE, 1..=256)?;
        let db_secs = parse_in_range(&lookup, "DB_TIMEOUT_SECS", DEFAULT_DB_TIMEOUT_SECS, 1..=60)?;
        let capacity = parse_in_range(
            &lookup,
            "MEMORY_STORE_CAPACITY",
            DEFAULT_MEMORY_STORE_CAPACITY,
            0..=usize::MAX,
        )?;

        Ok(Self {
            ml_service_url,
            predict_timeout: Duration::from_secs(predict_secs),
            database_url,
            db_pool_size,
            db_timeout: Duration::from_secs(db_secs),
            memory_store_capacity: (capacity > 0).then_some(capacity),
        })
    }
}

fn parse_in_range<F, T>(
    lookup: &F,
    key: &'static str,
    default: T,
    range: std::ops::RangeInclusive<T>,
) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + PartialOrd + std::fmt::Display,
{
    let Some(raw) = lookup(key) else {
        return Ok(default);
    };
    let value = raw
        .trim()
        .parse::<T>()
        .map_err(|_| invalid(key, &raw, "not a number"))?;
    if !range.contains(&value) {
        return Err(invalid(
            key,
            &raw,
            &format!("must be between {} and {}", range.start(), range.end()),
        ));
    }
    Ok(value)
}

fn invalid(key: &'static str, value: &str, reason: &str) -> ConfigError {
    ConfigError::Invalid {
        key,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Wire the HTTP classifier and a durable store backed by memory.
///
/// A database that cannot be reached here is not fatal: submissions fall
/// back to the memory store until it comes back.
pub async fn build_orchestrator(
    config: &IntakeConfig,
) -> Result<SubmissionOrchestrator, ConfigError> {
    let classifier = HttpClassifier::new(&config.ml_service_url, config.predict_timeout)?;

    let durable = DurableStore::new(&DurableStoreConfig {
        url: config.database_url.clone(),
        pool_size: config.db_pool_size,
        timeout: config.db_timeout,
    })?;
    if let Err(e) = durable.ensure_schema().await {
        warn!(error = %e, "durable store not ready, submissions will use the memory store");
    }

    let memory = match config.memory_store_capacity {
        Some(capacity) => MemoryStore::with_capacity(capacity),
        None => MemoryStore::new(),
    };
    let store = FallbackStore::new(Arc::new(durable), Arc::new(memory));

    info!(
        ml_service_url = %config.ml_service_url,
        predict_timeout = ?config.predict_timeout,
        memory_store_capacity = ?config.memory_store_capacity,
        "submission orchestrator ready"
    );

    Ok(SubmissionOrchestrator::new(
        Arc::new(classifier),
        Arc::new(store),
        config.predict_timeout,
    ))
}
