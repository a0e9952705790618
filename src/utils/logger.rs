use std::env;
use std::sync::Once;
use tracing::Level;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

static INIT: Once = Once::new();

/// Resolves the log level from the `LOGLEVEL` environment variable,
/// defaulting to INFO for unset or unrecognised values.
fn level_from_env() -> Level {
    let log_level = env::var("LOGLEVEL")
        .unwrap_or_else(|_| "INFO".to_string())
        .to_uppercase();
    match log_level.as_str() {
        "DEBUG" => Level::DEBUG,
        "ERROR" => Level::ERROR,
        "WARN" => Level::WARN,
        "TRACE" => Level::TRACE,
        _ => Level::INFO,
    }
}

/// Sets up the global tracing subscriber.
///
/// Safe to call more than once; only the first call installs the subscriber.
///
/// Environment variables:
/// - `LOGLEVEL`: log level (DEBUG, INFO, WARN, ERROR, TRACE), default INFO
pub fn setup_logger() -> Result<(), Box<dyn std::error::Error>> {
    INIT.call_once(|| {
        let level = level_from_env();

        tracing_subscriber::registry()
            .with(tracing_subscriber::fmt::layer().with_target(false))
            .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
            .init();

        tracing::debug!("Log level set to: {}", level);
    });

    Ok(())
}
