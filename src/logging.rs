// ============================================================================
// Logging
// Global tracing subscriber with an env-style filter
// ============================================================================

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global `tracing` subscriber.
///
/// `level` is either a bare level ("debug") or a full filter directive
/// ("decimal_calculator=debug,tower_http=info"). An unparsable value falls
/// back to "info".
pub fn init(level: &str) -> Result<(), tracing_subscriber::util::TryInitError> {
    let env_filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()
}
