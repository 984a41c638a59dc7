//! Classified, annotated error chains
//!
//! `errs` wraps a failure with a classification code, a message, diagnostic
//! metadata and the call site of the wrap, and renders the whole chain as an
//! ordered trace, source first.
//!
//! # Modules
//!
//! - `chain` - the chain node type, construction and rendering
//! - `frame` - call-site capture and the process-wide capture registry
//! - `context` - `Result` extensions for building chains at `?` sites
//! - `config` - capture configuration with environment variable loading
//! - `logging` - emitting chains through `tracing`
//!
//! # Example
//!
//! ```rust
//! use errs::{metadata, ErrorCode};
//!
//! let io = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
//! let root = errs::new(Some(io), 5, metadata![]).unwrap();
//! let err = errs::wrap(Some(root), "failed to save file", metadata!["path", "/tmp/x"]).unwrap();
//!
//! let trace = err.to_string();
//! let lines: Vec<&str> = trace.lines().collect();
//! assert!(lines[0].ends_with("| disk full"));
//! assert!(lines[1].ends_with("| failed to save file"));
//! assert_eq!(lines[2], "\t[\"path\", \"/tmp/x\"]");
//! assert_eq!(err.source_node().code(), ErrorCode::new(5));
//! ```

pub mod chain;
pub mod config;
pub mod context;
pub mod frame;
pub mod logging;
mod macros;

pub use chain::{
    as_chain, is, new, new_in, render, wrap, wrap_in, Describe, Error, ErrorCode, Layers, Metadata,
};
pub use context::ResultExt;
pub use frame::{CaptureCallSite, Frame};

use config::{ConfigBuilder, ErrsConfig, ENV_PREFIX};

/// Errors raised by the crate's own configuration surface
#[derive(Debug, thiserror::Error)]
pub enum ErrsError {
    /// Environment variable present but unusable
    #[error("Invalid environment variable {key}: {reason}")]
    InvalidEnv { key: String, reason: String },

    /// Unknown capture mode name
    #[error("Invalid capture mode: {0}")]
    InvalidCaptureMode(String),

    /// Configuration failed validation
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ErrsError>;

/// Load capture configuration from `ERRS_*` variables and install it
pub fn init() -> Result<()> {
    let config = ErrsConfig::from_env_with_defaults(ENV_PREFIX)?;
    init_with(&config)
}

/// Validate `config` and install the capture it selects
pub fn init_with(config: &ErrsConfig) -> Result<()> {
    config.validate()?;
    tracing::debug!(
        capture = %config.capture_mode(),
        max_frames = config.max_frames(),
        "Initializing errs"
    );
    frame::install(config.call_site_capture());
    Ok(())
}

/// Get version information
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
