//! Annotated error chains
//!
//! A chain is a linked list of immutable nodes. The first node (the source)
//! is created by [`new`] from a foreign cause; every [`wrap`] adds an outer
//! node pointing at the node it wraps and at the chain's source.
//!
//! ```rust
//! use errs::{Metadata, ErrorCode};
//!
//! let io = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
//! let root = errs::new(Some(io), 5, Metadata::new()).unwrap();
//! let outer = errs::wrap(Some(root.clone()), "failed to save file", Metadata::new()).unwrap();
//!
//! assert_eq!(root.code(), ErrorCode::new(5));
//! assert!(outer.code().is_unclassified());
//! assert!(outer.source_node().same_node(&root));
//! assert_eq!(outer.depth(), 2);
//! ```

mod code;
mod metadata;
mod render;

pub use code::ErrorCode;
pub use metadata::Metadata;
pub use render::render;

use crate::frame::{self, CaptureCallSite, Frame};
use std::any::Any;
use std::error::Error as StdError;
use std::fmt;
use std::panic::Location;
use std::sync::Arc;
use tracing::trace;

/// Capability every cause must offer: a description of what went wrong
///
/// Implemented for every [`fmt::Display`] type, which covers all
/// [`std::error::Error`] implementations.
pub trait Describe {
    /// Text stored as the message of a chain's source node
    fn describe(&self) -> String;
}

impl<T: fmt::Display + ?Sized> Describe for T {
    fn describe(&self) -> String {
        self.to_string()
    }
}

/// Handle to one node of an error chain
///
/// Cloning is cheap and yields a handle to the same node.
#[derive(Clone)]
pub struct Error {
    inner: Arc<Node>,
}

struct Node {
    code: ErrorCode,
    message: String,
    metadata: Metadata,
    frame: Frame,
    /// `None` marks the node as its own source
    source: Option<Error>,
    wrapper: Option<Error>,
}

impl Drop for Node {
    fn drop(&mut self) {
        // Unlink iteratively so long chains don't recurse on drop
        let mut next = self.wrapper.take();
        while let Some(Error { inner }) = next {
            match Arc::try_unwrap(inner) {
                Ok(mut node) => next = node.wrapper.take(),
                Err(_) => break,
            }
        }
    }
}

impl Error {
    /// Classification code of this layer
    pub fn code(&self) -> ErrorCode {
        self.inner.code
    }

    /// Message of this layer
    pub fn message(&self) -> &str {
        &self.inner.message
    }

    /// Metadata attached at this layer
    pub fn metadata(&self) -> &Metadata {
        &self.inner.metadata
    }

    /// Call site that created this layer
    pub fn frame(&self) -> &Frame {
        &self.inner.frame
    }

    /// First node of the chain; a source node returns itself
    pub fn source_node(&self) -> &Error {
        self.inner.source.as_ref().unwrap_or(self)
    }

    /// Node this layer wraps, `None` for the source
    pub fn wrapper(&self) -> Option<&Error> {
        self.inner.wrapper.as_ref()
    }

    /// Whether this node started its chain
    pub fn is_source(&self) -> bool {
        self.inner.source.is_none()
    }

    /// Whether both handles point at the same node
    pub fn same_node(&self, other: &Error) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Iterate from this node down to the source
    pub fn layers(&self) -> Layers<'_> {
        Layers { next: Some(self) }
    }

    /// Number of nodes from this one down to the source, inclusive
    pub fn depth(&self) -> usize {
        self.layers().count()
    }

    fn root_at(
        capture: &dyn CaptureCallSite,
        site: &'static Location<'static>,
        cause: &dyn Describe,
        code: ErrorCode,
        metadata: Metadata,
    ) -> Self {
        let frame = capture.capture(site);
        trace!(code = %code, file = %frame.file, line = frame.line, "Error chain started");

        Self {
            inner: Arc::new(Node {
                code,
                message: cause.describe(),
                metadata,
                frame,
                source: None,
                wrapper: None,
            }),
        }
    }

    fn layer_at(
        capture: &dyn CaptureCallSite,
        site: &'static Location<'static>,
        wrapped: &Error,
        message: String,
        metadata: Metadata,
    ) -> Self {
        let frame = capture.capture(site);
        trace!(
            wrapped_code = %wrapped.code(),
            file = %frame.file,
            line = frame.line,
            "Error chain wrapped"
        );

        Self {
            inner: Arc::new(Node {
                code: ErrorCode::UNCLASSIFIED,
                message,
                metadata,
                frame,
                source: Some(wrapped.source_node().clone()),
                wrapper: Some(wrapped.clone()),
            }),
        }
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Error")
            .field("code", &self.inner.code)
            .field("message", &self.inner.message)
            .field("metadata", &self.inner.metadata)
            .field("frame", &self.inner.frame)
            .field("is_source", &self.is_source())
            .field("depth", &self.depth())
            .finish()
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.wrapper().map(|e| e as &(dyn StdError + 'static))
    }
}

/// Iterator over a chain, outermost node first
///
/// Created by [`Error::layers`].
#[derive(Debug, Clone)]
pub struct Layers<'a> {
    next: Option<&'a Error>,
}

impl<'a> Iterator for Layers<'a> {
    type Item = &'a Error;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.wrapper();
        Some(current)
    }
}

/// View `value` as a chain node, if it is one
///
/// Recognises [`Error`] itself and boxed `dyn std::error::Error` values
/// holding an [`Error`].
pub fn as_chain<C: Any>(value: &C) -> Option<&Error> {
    let any = value as &dyn Any;
    if let Some(err) = any.downcast_ref::<Error>() {
        return Some(err);
    }
    if let Some(boxed) = any.downcast_ref::<Box<dyn StdError + Send + Sync>>() {
        return boxed.downcast_ref::<Error>();
    }
    if let Some(boxed) = any.downcast_ref::<Box<dyn StdError + Send>>() {
        return boxed.downcast_ref::<Error>();
    }
    if let Some(boxed) = any.downcast_ref::<Box<dyn StdError>>() {
        return boxed.downcast_ref::<Error>();
    }
    None
}

/// Whether `value` is present and is a chain node
pub fn is<C: Any>(value: Option<&C>) -> bool {
    value.is_some_and(|v| as_chain(v).is_some())
}

/// Start a chain from `cause`
///
/// Returns `None` when `cause` is `None`, so "no error" passes through
/// untouched. The message of the new source node is the cause's
/// description. Uses the process-wide capture (see [`crate::frame::install`]).
#[track_caller]
pub fn new<C>(cause: Option<C>, code: impl Into<ErrorCode>, metadata: Metadata) -> Option<Error>
where
    C: Describe,
{
    let site = Location::caller();
    let cause = cause?;
    let code = code.into();
    Some(frame::with_installed(|capture| {
        Error::root_at(capture, site, &cause, code, metadata)
    }))
}

/// [`new`] with an explicit capture
#[track_caller]
pub fn new_in<C>(
    capture: &dyn CaptureCallSite,
    cause: Option<C>,
    code: impl Into<ErrorCode>,
    metadata: Metadata,
) -> Option<Error>
where
    C: Describe,
{
    let site = Location::caller();
    let cause = cause?;
    Some(Error::root_at(capture, site, &cause, code.into(), metadata))
}

/// Add a layer on top of `cause`
///
/// Returns `None` when `cause` is `None`. When `cause` is a chain node the new
/// node is unclassified, carries `message` and points at `cause`. Any other
/// cause starts a fresh chain as if passed to [`new`] with code `0`; `message`
/// is not recorded in that case.
#[track_caller]
pub fn wrap<C>(cause: Option<C>, message: impl Into<String>, metadata: Metadata) -> Option<Error>
where
    C: Describe + Any,
{
    let site = Location::caller();
    let cause = cause?;
    Some(frame::with_installed(|capture| {
        wrap_at(capture, site, &cause, message.into(), metadata)
    }))
}

/// [`wrap`] with an explicit capture
#[track_caller]
pub fn wrap_in<C>(
    capture: &dyn CaptureCallSite,
    cause: Option<C>,
    message: impl Into<String>,
    metadata: Metadata,
) -> Option<Error>
where
    C: Describe + Any,
{
    let site = Location::caller();
    let cause = cause?;
    Some(wrap_at(capture, site, &cause, message.into(), metadata))
}

pub(crate) fn wrap_at<C>(
    capture: &dyn CaptureCallSite,
    site: &'static Location<'static>,
    cause: &C,
    message: String,
    metadata: Metadata,
) -> Error
where
    C: Describe + Any,
{
    match as_chain(cause) {
        Some(wrapped) => Error::layer_at(capture, site, wrapped, message, metadata),
        None => Error::root_at(capture, site, cause, ErrorCode::UNCLASSIFIED, metadata),
    }
}

pub(crate) fn new_at<C: Describe>(
    capture: &dyn CaptureCallSite,
    site: &'static Location<'static>,
    cause: &C,
    code: ErrorCode,
) -> Error {
    Error::root_at(capture, site, cause, code, Metadata::new())
}
