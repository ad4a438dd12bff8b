use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::prelude::*;

const DEFAULT_LEVEL: &str = "warn";

/// Install the stderr subscriber.
///
/// `level` takes precedence over `RUST_LOG`; without either, only warnings
/// and errors are shown.
pub fn init_logging(level: Option<&str>, json: bool) -> Result<(), String> {
    let filter = match level {
        Some(level) => EnvFilter::try_new(level).map_err(|err| err.to_string())?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL)),
    };

    let layer = tracing_subscriber::fmt::layer()
        .with_timer(UtcTime::rfc_3339())
        .with_writer(std::io::stderr);
    let registry = tracing_subscriber::registry().with(filter);

    let result = if json {
        registry.with(layer.json()).try_init()
    } else {
        registry.with(layer).try_init()
    };
    result.map_err(|err| err.to_string())
}
