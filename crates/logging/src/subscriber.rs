//! crates/logging/src/subscriber.rs
//! Subscriber installation for command-line tools.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};

use super::config::LogConfig;

/// Builds the event filter for `config`.
///
/// A valid `RUST_LOG` takes precedence; an invalid one is ignored.
pub fn build_filter(config: &LogConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| fallback_filter(config))
}

fn fallback_filter(config: &LogConfig) -> EnvFilter {
    EnvFilter::new(config.filter_directives())
}

/// Installs a stderr subscriber as the global default.
///
/// # Errors
///
/// Fails when a global subscriber is already installed.
///
/// # Example
///
/// ```rust,ignore
/// use logging::{LogConfig, init_tracing};
///
/// init_tracing(&LogConfig::from_verbose_level(2))?;
/// tracing::debug!(target: "sstr::buffer", "ready");
/// ```
pub fn init_tracing(config: &LogConfig) -> Result<(), TryInitError> {
    let layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(config.with_target)
        .with_ansi(config.ansi);

    tracing_subscriber::registry()
        .with(build_filter(config))
        .with(layer)
        .try_init()
}
