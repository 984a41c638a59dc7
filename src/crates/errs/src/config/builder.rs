//! Configuration builder trait
//!
//! Common shape for configuration structures: defaults, validation,
//! environment loading and merging of several sources.

use crate::Result;

/// Trait for configuration structures that support building, validation, and merging
///
/// # Example
///
/// ```rust
/// use errs::config::ConfigBuilder;
///
/// #[derive(Clone, Default)]
/// struct TraceConfig {
///     width: Option<usize>,
/// }
///
/// impl ConfigBuilder for TraceConfig {
///     fn from_env(prefix: &str) -> errs::Result<Self> {
///         let key = errs::config::build_env_key(prefix, "width");
///         Ok(Self { width: errs::config::get_env_parse(&key)? })
///     }
///
///     fn merge(&mut self, other: Self) -> &mut Self {
///         if other.width.is_some() {
///             self.width = other.width;
///         }
///         self
///     }
/// }
///
/// let config = TraceConfig::from_env_with_defaults("DOC_TRACE_").unwrap();
/// assert!(config.width.is_none());
/// ```
pub trait ConfigBuilder: Default + Clone {
    /// Validate the configuration
    fn validate(&self) -> Result<()> {
        Ok(())
    }

    /// Load configuration from environment variables named `{prefix}{FIELD}`
    ///
    /// Variables that are not set leave the matching field unset.
    fn from_env(prefix: &str) -> Result<Self>;

    /// Merge another configuration into this one
    ///
    /// Fields set in `other` overwrite the ones in `self`.
    fn merge(&mut self, other: Self) -> &mut Self;

    /// Create and validate the default configuration
    fn build() -> Result<Self> {
        let config = Self::default();
        config.validate()?;
        Ok(config)
    }

    /// Defaults, overridden by the environment, then validated
    fn from_env_with_defaults(prefix: &str) -> Result<Self> {
        let mut config = Self::default();
        config.merge(Self::from_env(prefix)?);
        config.validate()?;
        Ok(config)
    }
}
