//! Environment variable loading

use crate::{ErrsError, Result};
use std::env;
use std::str::FromStr;

/// Read an environment variable
///
/// * `Ok(Some(value))` if the variable is set
/// * `Ok(None)` if it is not set
/// * `Err` if it holds invalid UTF-8
pub fn get_env(key: &str) -> Result<Option<String>> {
    match env::var(key) {
        Ok(val) => Ok(Some(val)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(env::VarError::NotUnicode(_)) => Err(ErrsError::InvalidEnv {
            key: key.to_string(),
            reason: "invalid UTF-8".to_string(),
        }),
    }
}

/// Read and parse an environment variable; unset yields `Ok(None)`
pub fn get_env_parse<T>(key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match get_env(key)? {
        Some(val) => val
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| ErrsError::InvalidEnv {
                key: key.to_string(),
                reason: e.to_string(),
            }),
        None => Ok(None),
    }
}

/// Build a prefixed environment variable name
///
/// ```rust
/// assert_eq!(errs::config::build_env_key("ERRS_", "max_frames"), "ERRS_MAX_FRAMES");
/// ```
pub fn build_env_key(prefix: &str, name: &str) -> String {
    format!("{}{}", prefix, name.to_uppercase())
}
