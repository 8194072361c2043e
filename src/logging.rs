//! Tracing subscriber setup for the binary.

use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding the log filter directives.
pub const LOG_ENV_VAR: &str = "THEMESHIFT_LOG";
const DEFAULT_LOG_FILTER: &str = "warn";

/// Build the filter from `THEMESHIFT_LOG`, falling back to `warn` when the
/// variable is unset or does not parse.
pub fn env_filter(value: Option<&str>) -> EnvFilter {
    value
        .map(str::trim)
        .filter(|directives| !directives.is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Install the global subscriber writing to stderr. Safe to call twice; the
/// second call is a no-op.
pub fn init_logging() {
    let filter = env_filter(std::env::var(LOG_ENV_VAR).ok().as_deref());
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
