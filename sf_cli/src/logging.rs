//! Structured logging for the CLI.
//!
//! Logs go to stderr so command output on stdout stays machine readable.
//! Records emitted through the `log` facade by `swiss_forum` are forwarded
//! into the same subscriber.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Commands slower than this are logged at warn level
pub const SLOW_COMMAND_MS: u64 = 1000;

const DEFAULT_FILTER: &str = "info,sqlx=warn";

/// Initialize logging
///
/// Levels are configurable via the `RUST_LOG` env var.
///
/// # Example
///
/// ```no_run
/// use sf_cli::logging;
///
/// logging::init();
/// tracing::info!("Starting");
/// ```
pub fn init() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}

/// Log how long a command took
///
/// # Example
///
/// ```
/// use sf_cli::logging::log_command;
/// use std::time::Instant;
///
/// let start = Instant::now();
/// // ... run the command ...
/// log_command("standings", start.elapsed().as_millis() as u64);
/// ```
pub fn log_command(command: &str, duration_ms: u64) {
    if duration_ms > SLOW_COMMAND_MS {
        tracing::warn!(
            command = command,
            duration_ms = duration_ms,
            "Slow command"
        );
    } else {
        tracing::debug!(
            command = command,
            duration_ms = duration_ms,
            "Command completed"
        );
    }
}
