//! Variadic front-ends for [`crate::new`] and [`crate::wrap`]

/// Build a [`Metadata`](crate::Metadata) sequence from a list of values
///
/// ```rust
/// let meta = errs::metadata!["path", "/tmp/x", 3];
/// assert_eq!(meta.len(), 3);
/// ```
#[macro_export]
macro_rules! metadata {
    () => {
        $crate::Metadata::new()
    };
    ($($value:expr),+ $(,)?) => {
        $crate::Metadata::new()$(.with($value))+
    };
}

/// Start a chain: `new_err!(cause, code, metadata...)`
///
/// `cause` is an `Option`; `None` yields `None`.
///
/// ```rust
/// let io = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
/// let err = errs::new_err!(Some(io), 5, "path", "/tmp/x").unwrap();
/// assert_eq!(err.metadata().len(), 2);
/// ```
#[macro_export]
macro_rules! new_err {
    ($cause:expr, $code:expr $(, $value:expr)* $(,)?) => {
        $crate::new($cause, $code, $crate::metadata![$($value),*])
    };
}

/// Extend a chain: `wrap_err!(cause, message, metadata...)`
///
/// ```rust
/// let io = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
/// let root = errs::new_err!(Some(io), 5).unwrap();
/// let err = errs::wrap_err!(Some(root), "failed to save file", "path", "/tmp/x").unwrap();
/// assert_eq!(err.message(), "failed to save file");
/// ```
#[macro_export]
macro_rules! wrap_err {
    ($cause:expr, $message:expr $(, $value:expr)* $(,)?) => {
        $crate::wrap($cause, $message, $crate::metadata![$($value),*])
    };
}
