use tracing_subscriber::EnvFilter;

/// Structured JSON logs, filtered by `RUST_LOG`.
///
/// Does nothing if a global subscriber is already installed.
pub fn init() {
    let installed = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init();
    if installed.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}

/// Human-readable logs for local development, `info` unless `RUST_LOG` says
/// otherwise.
pub fn init_pretty() {
    let installed = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .try_init();
    if installed.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}
