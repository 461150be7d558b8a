/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/25
******************************************************************************/
use std::env;
use std::str::FromStr;
use tracing::warn;

/// Reads an environment variable, falling back to `default` when the
/// variable is unset or does not parse as `T`
///
/// A set-but-unparseable value is logged before the fallback is used, so a
/// typo in a numeric knob does not silently change behavior.
///
/// # Arguments
/// * `name` - Name of the environment variable
/// * `default` - Value used when the variable is unset or invalid
///
/// # Returns
/// The parsed value, or `default`
pub fn get_env_or_default<T: FromStr>(name: &str, default: T) -> T {
    let Ok(raw) = env::var(name) else {
        return default;
    };
    match raw.parse() {
        Ok(value) => value,
        Err(_) => {
            warn!("Ignoring unparseable {}={}, using the default", name, raw);
            default
        }
    }
}

/// Reads and parses an environment variable, yielding `None` when it is
/// unset or invalid
///
/// # Arguments
/// * `name` - Name of the environment variable
///
/// # Returns
/// The parsed value, if the variable is set and parses as `T`
pub fn get_env_or_none<T: FromStr>(name: &str) -> Option<T> {
    env::var(name).ok()?.parse().ok()
}
