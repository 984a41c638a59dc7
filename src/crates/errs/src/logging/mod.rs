//! Logging helpers
//!
//! Emits error chains through `tracing`. The outer layer's code and message
//! and the chain depth become structured fields; the full trace is the event
//! message.

use crate::chain::Error;
use crate::{ErrsError, Result};
use std::str::FromStr;
use tracing::{debug, error, info, warn};

/// Log levels for chain logging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ErrsError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            _ => Err(ErrsError::InvalidConfig(format!("unknown log level: {}", s))),
        }
    }
}

/// Log a chain at `level`
///
/// # Example
///
/// ```rust
/// use errs::logging::{log_chain, LogLevel};
///
/// let io = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
/// let err = errs::new_err!(Some(io), 5).unwrap();
/// log_chain(&err, LogLevel::Warn);
/// ```
pub fn log_chain(err: &Error, level: LogLevel) {
    let code = err.code().get();
    let depth = err.depth();
    let outer = err.message();

    match level {
        LogLevel::Debug => debug!(code, depth, outer, "{}", err),
        LogLevel::Info => info!(code, depth, outer, "{}", err),
        LogLevel::Warn => warn!(code, depth, outer, "{}", err),
        LogLevel::Error => error!(code, depth, outer, "{}", err),
    }
}

/// Log `err` at [`LogLevel::Error`] if present, passing it through
///
/// Keeps the "absent means no error" convention usable inline:
///
/// ```rust
/// let none = errs::logging::logged(errs::new(None::<std::io::Error>, 1, errs::Metadata::new()));
/// assert!(none.is_none());
/// ```
pub fn logged(err: Option<Error>) -> Option<Error> {
    if let Some(e) = &err {
        log_chain(e, LogLevel::Error);
    }
    err
}
