use crate::utils::config::get_env_or_default;
use tracing::Level;

/// Initializes the global tracing subscriber
///
/// The log level is read from the `LOG_LEVEL` environment variable and
/// defaults to `info`. Calling this more than once is harmless; subsequent
/// calls are ignored so tests can call it freely.
pub fn setup_logger() {
    let level = get_env_or_default("LOG_LEVEL", String::from("info"));
    let level = match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .try_init();
}
