//! Call-site capture
//!
//! Every chain node records the code location that created it. Capture is
//! anchored on the caller's [`Location`] (all constructors are
//! `#[track_caller]`), and a [`CaptureCallSite`] implementation turns that
//! anchor into a [`Frame`].
//!
//! Three captures ship with the crate:
//!
//! - [`Symbolized`] - file and line from the anchor, function name resolved
//!   from debug info (the default)
//! - [`LocationOnly`] - file and line only, no stack walk
//! - [`Disabled`] - always the sentinel frame
//!
//! The capture used by [`crate::new`] and [`crate::wrap`] is process-wide and
//! can be replaced with [`install`].

mod symbolize;

pub use symbolize::{Symbolized, DEFAULT_MAX_FRAMES};

use parking_lot::{const_rwlock, RwLock};
use std::fmt;
use std::panic::Location;
use std::sync::Arc;
use tracing::debug;

/// Code location captured when a node is created
///
/// A frame whose fields are all empty is the sentinel produced when no
/// location could be resolved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Frame {
    /// Source file path
    pub file: String,
    /// Line number, `0` when unknown
    pub line: u32,
    /// Fully-qualified function name, empty when unknown
    pub function: String,
}

impl Frame {
    /// Create a frame
    pub fn new(file: impl Into<String>, line: u32, function: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            line,
            function: function.into(),
        }
    }

    /// The frame stored when capture yields nothing
    pub fn sentinel() -> Self {
        Self::default()
    }

    /// Whether this is the sentinel frame
    pub fn is_sentinel(&self) -> bool {
        self.file.is_empty() && self.line == 0 && self.function.is_empty()
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}: {}", self.file, self.line, self.function)
    }
}

/// Resolves a caller location into a [`Frame`]
///
/// Implementations must not panic; return [`Frame::sentinel`] when nothing
/// can be resolved.
pub trait CaptureCallSite: Send + Sync {
    /// Resolve the frame of the code that called a chain constructor
    fn capture(&self, site: &'static Location<'static>) -> Frame;
}

impl<F> CaptureCallSite for F
where
    F: Fn(&'static Location<'static>) -> Frame + Send + Sync,
{
    fn capture(&self, site: &'static Location<'static>) -> Frame {
        self(site)
    }
}

/// Capture file and line without resolving the function name
#[derive(Debug, Clone, Copy, Default)]
pub struct LocationOnly;

impl CaptureCallSite for LocationOnly {
    fn capture(&self, site: &'static Location<'static>) -> Frame {
        Frame::new(site.file(), site.line(), "")
    }
}

/// Capture nothing; every node gets the sentinel frame
#[derive(Debug, Clone, Copy, Default)]
pub struct Disabled;

impl CaptureCallSite for Disabled {
    fn capture(&self, _site: &'static Location<'static>) -> Frame {
        Frame::sentinel()
    }
}

static INSTALLED: RwLock<Option<Arc<dyn CaptureCallSite>>> = const_rwlock(None);

static DEFAULT_CAPTURE: Symbolized = Symbolized::new(DEFAULT_MAX_FRAMES);

/// Replace the process-wide capture
pub fn install(capture: Arc<dyn CaptureCallSite>) {
    *INSTALLED.write() = Some(capture);
    debug!("Installed call-site capture");
}

/// Restore the default [`Symbolized`] capture
pub fn reset() {
    *INSTALLED.write() = None;
    debug!("Reset call-site capture to default");
}

/// Run `f` against the process-wide capture
///
/// The lock is released before `f` runs, so a capture may itself build
/// chain nodes.
pub(crate) fn with_installed<R>(f: impl FnOnce(&dyn CaptureCallSite) -> R) -> R {
    let current = INSTALLED.read().clone();
    match current.as_deref() {
        Some(capture) => f(capture),
        None => f(&DEFAULT_CAPTURE),
    }
}
