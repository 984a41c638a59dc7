//! Diagnostic values attached to a single chain layer

use std::fmt;
use std::sync::Arc;

type Value = Arc<dyn fmt::Debug + Send + Sync>;

/// Ordered sequence of opaque diagnostic values
///
/// Values are only ever rendered, so anything implementing [`fmt::Debug`]
/// can be attached. The sequence renders as a debug list, e.g.
/// `["path", "/tmp/x"]`.
///
/// # Example
///
/// ```rust
/// use errs::Metadata;
///
/// let meta = Metadata::new().with("path").with("/tmp/x").with(3u8);
/// assert_eq!(meta.len(), 3);
/// assert_eq!(format!("{:?}", meta), r#"["path", "/tmp/x", 3]"#);
/// ```
#[derive(Clone, Default)]
pub struct Metadata {
    values: Vec<Value>,
}

impl Metadata {
    /// Create an empty sequence
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a value
    pub fn with<T>(mut self, value: T) -> Self
    where
        T: fmt::Debug + Send + Sync + 'static,
    {
        self.push(value);
        self
    }

    /// Append a value in place
    pub fn push<T>(&mut self, value: T)
    where
        T: fmt::Debug + Send + Sync + 'static,
    {
        self.values.push(Arc::new(value));
    }

    /// Number of values
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no values are attached
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over the values in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &(dyn fmt::Debug + Send + Sync)> + '_ {
        self.values.iter().map(|v| v.as_ref())
    }
}

impl fmt::Debug for Metadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.values.iter()).finish()
    }
}
