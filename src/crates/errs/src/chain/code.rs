//! Error classification codes

use serde::{Deserialize, Serialize};
use std::fmt;

/// Caller-assigned error category
///
/// Codes carry no meaning inside this crate beyond `0`, which marks a layer
/// as unclassified. Wrap layers and foreign causes always get `0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorCode(i32);

impl ErrorCode {
    /// Code of layers that were never classified
    pub const UNCLASSIFIED: ErrorCode = ErrorCode(0);

    /// Create a code from its raw value
    pub const fn new(code: i32) -> Self {
        Self(code)
    }

    /// Raw value
    pub const fn get(self) -> i32 {
        self.0
    }

    /// Whether this is the unclassified code
    pub const fn is_unclassified(self) -> bool {
        self.0 == 0
    }
}

impl From<i32> for ErrorCode {
    fn from(code: i32) -> Self {
        Self(code)
    }
}

impl From<ErrorCode> for i32 {
    fn from(code: ErrorCode) -> Self {
        code.0
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
