//! `Result` extensions for building chains at `?` sites
//!
//! ```rust
//! use errs::ResultExt;
//!
//! fn read_config(path: &str) -> Result<String, errs::Error> {
//!     std::fs::read_to_string(path).classify(2)
//! }
//!
//! fn start() -> Result<String, errs::Error> {
//!     read_config("/definitely/missing.toml").wrap_err("failed to load configuration")
//! }
//!
//! let err = start().unwrap_err();
//! assert_eq!(err.depth(), 2);
//! ```

use crate::chain::{self, Describe, Error, ErrorCode, Metadata};
use crate::frame;
use std::any::Any;
use std::panic::Location;

/// Extension trait attaching chain layers to a failed `Result`
///
/// All methods record the location of their caller, like [`crate::new`] and
/// [`crate::wrap`].
pub trait ResultExt<T> {
    /// Start a chain with `code`, keeping the error's description as message
    fn classify(self, code: impl Into<ErrorCode>) -> Result<T, Error>;

    /// Add a wrap layer with `message`
    ///
    /// A foreign error starts a fresh unclassified chain instead and
    /// `message` is not recorded, matching [`crate::wrap`].
    fn wrap_err(self, message: impl Into<String>) -> Result<T, Error>;

    /// Like [`ResultExt::wrap_err`], building the message only on error
    fn wrap_err_with<F>(self, f: F) -> Result<T, Error>
    where
        F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Describe + Any,
{
    #[track_caller]
    fn classify(self, code: impl Into<ErrorCode>) -> Result<T, Error> {
        let site = Location::caller();
        match self {
            Ok(value) => Ok(value),
            Err(e) => {
                let code = code.into();
                Err(frame::with_installed(|capture| {
                    chain::new_at(capture, site, &e, code)
                }))
            }
        }
    }

    #[track_caller]
    fn wrap_err(self, message: impl Into<String>) -> Result<T, Error> {
        let site = Location::caller();
        match self {
            Ok(value) => Ok(value),
            Err(e) => Err(frame::with_installed(|capture| {
                chain::wrap_at(capture, site, &e, message.into(), Metadata::new())
            })),
        }
    }

    #[track_caller]
    fn wrap_err_with<F>(self, f: F) -> Result<T, Error>
    where
        F: FnOnce() -> String,
    {
        let site = Location::caller();
        match self {
            Ok(value) => Ok(value),
            Err(e) => Err(frame::with_installed(|capture| {
                chain::wrap_at(capture, site, &e, f(), Metadata::new())
            })),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    fn inner_operation() -> Result<(), io::Error> {
        Err(io::Error::new(io::ErrorKind::NotFound, "File not found"))
    }

    fn middle_operation() -> Result<(), Error> {
        inner_operation().classify(404)
    }

    fn outer_operation() -> Result<(), Error> {
        middle_operation().wrap_err("Application initialization failed")
    }

    #[test]
    fn test_classify() {
        let err = middle_operation().unwrap_err();
        assert!(err.is_source());
        assert_eq!(err.code(), ErrorCode::new(404));
        assert_eq!(err.message(), "File not found");
    }

    #[test]
    fn test_wrap_err_extends_chain() {
        let err = outer_operation().unwrap_err();
        assert_eq!(err.depth(), 2);
        assert_eq!(err.message(), "Application initialization failed");
        assert_eq!(err.source_node().code(), ErrorCode::new(404));
    }

    #[test]
    fn test_wrap_err_on_foreign_error_drops_message() {
        let err = inner_operation().wrap_err("never recorded").unwrap_err();
        assert!(err.is_source());
        assert!(err.code().is_unclassified());
        assert!(!err.to_string().contains("never recorded"));
    }

    #[test]
    fn test_wrap_err_with_is_lazy_on_ok() {
        let ok: Result<u8, Error> = Ok(1);
        let value = ok
            .wrap_err_with(|| panic!("message built for a successful result"))
            .unwrap();
        assert_eq!(value, 1);
    }

    #[test]
    fn test_wrap_err_with_message() {
        let err = outer_operation()
            .wrap_err_with(|| format!("request {} failed", 7))
            .unwrap_err();
        assert_eq!(err.message(), "request 7 failed");
        assert_eq!(err.depth(), 3);
    }

    #[test]
    fn test_records_caller_line() {
        let line = line!() + 1;
        let err = inner_operation().classify(1).unwrap_err();
        assert_eq!(err.frame().line, line);
        assert!(err.frame().file.ends_with("context.rs"));
    }
}
