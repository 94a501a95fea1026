//! Logging initialization and configuration.
//!
//! Logs always go to standard error; standard output carries only
//! sanitized data.

use std::io::IsTerminal;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Build the filter from a level or directive string.
///
/// A bare level such as `debug` is scoped to this crate. Anything else is
/// taken as a full `EnvFilter` directive. Unparseable input falls back to
/// `stcat=warn`.
pub fn filter(directives: &str) -> EnvFilter {
    let directives = directives.trim();
    let directive = match directives {
        "error" | "warn" | "info" | "debug" | "trace" | "off" => format!("stcat={directives}"),
        _ => directives.to_string(),
    };
    EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("stcat=warn"))
}

/// Initialize the logging system.
///
/// # Panics
///
/// Panics if called more than once, or if another tracing subscriber
/// has already been set.
pub fn init(directives: &str) {
    tracing_subscriber::registry()
        .with(filter(directives))
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_ansi(std::io::stderr().is_terminal())
                .with_writer(std::io::stderr),
        )
        .init();
}

/// Try to initialize the logging system.
///
/// Returns `Ok(())` if successful, or `Err` if logging has already been
/// initialized.
pub fn try_init(directives: &str) -> Result<(), tracing_subscriber::util::TryInitError> {
    tracing_subscriber::registry()
        .with(filter(directives))
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_ansi(std::io::stderr().is_terminal())
                .with_writer(std::io::stderr),
        )
        .try_init()
}
