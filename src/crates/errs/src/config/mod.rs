//! Configuration of call-site capture
//!
//! Capture is configured through [`ErrsConfig`], usually loaded from the
//! environment:
//!
//! | Variable | Values | Default |
//! |---|---|---|
//! | `ERRS_CAPTURE` | `symbolized`, `location`, `off` | `symbolized` |
//! | `ERRS_MAX_FRAMES` | positive integer | `64` |
//!
//! ```rust
//! use errs::config::{CaptureMode, ConfigBuilder, ErrsConfig};
//!
//! let config = ErrsConfig::new().with_capture(CaptureMode::Location);
//! assert!(config.validate().is_ok());
//! errs::init_with(&config).unwrap();
//! ```

mod builder;
mod env;

pub use builder::ConfigBuilder;
pub use env::{build_env_key, get_env, get_env_parse};

use crate::frame::{CaptureCallSite, Disabled, LocationOnly, Symbolized, DEFAULT_MAX_FRAMES};
use crate::{ErrsError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Prefix of the environment variables read by [`crate::init`]
pub const ENV_PREFIX: &str = "ERRS_";

/// How chain constructors capture their call site
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaptureMode {
    /// File, line and function name
    #[default]
    Symbolized,
    /// File and line only
    Location,
    /// Sentinel frames only
    Off,
}

impl FromStr for CaptureMode {
    type Err = ErrsError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "symbolized" | "full" => Ok(Self::Symbolized),
            "location" => Ok(Self::Location),
            "off" | "none" | "disabled" => Ok(Self::Off),
            _ => Err(ErrsError::InvalidCaptureMode(s.to_string())),
        }
    }
}

impl fmt::Display for CaptureMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Symbolized => "symbolized",
            Self::Location => "location",
            Self::Off => "off",
        };
        f.write_str(name)
    }
}

/// Crate configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ErrsConfig {
    /// Capture mode, [`CaptureMode::Symbolized`] when unset
    pub capture: Option<CaptureMode>,
    /// Stack walk limit for symbolized capture, [`DEFAULT_MAX_FRAMES`] when unset
    pub max_frames: Option<usize>,
}

impl ErrsConfig {
    /// Create an empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the capture mode
    pub fn with_capture(mut self, capture: CaptureMode) -> Self {
        self.capture = Some(capture);
        self
    }

    /// Set the stack walk limit
    pub fn with_max_frames(mut self, max_frames: usize) -> Self {
        self.max_frames = Some(max_frames);
        self
    }

    /// Effective capture mode
    pub fn capture_mode(&self) -> CaptureMode {
        self.capture.unwrap_or_default()
    }

    /// Effective stack walk limit
    pub fn max_frames(&self) -> usize {
        self.max_frames.unwrap_or(DEFAULT_MAX_FRAMES)
    }

    /// Capture implementation selected by this configuration
    pub fn call_site_capture(&self) -> Arc<dyn CaptureCallSite> {
        match self.capture_mode() {
            CaptureMode::Symbolized => Arc::new(Symbolized::new(self.max_frames())),
            CaptureMode::Location => Arc::new(LocationOnly),
            CaptureMode::Off => Arc::new(Disabled),
        }
    }
}

impl ConfigBuilder for ErrsConfig {
    fn validate(&self) -> Result<()> {
        if self.max_frames == Some(0) {
            return Err(ErrsError::InvalidConfig(
                "max_frames must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    fn from_env(prefix: &str) -> Result<Self> {
        Ok(Self {
            capture: get_env_parse(&build_env_key(prefix, "capture"))?,
            max_frames: get_env_parse(&build_env_key(prefix, "max_frames"))?,
        })
    }

    fn merge(&mut self, other: Self) -> &mut Self {
        if other.capture.is_some() {
            self.capture = other.capture;
        }
        if other.max_frames.is_some() {
            self.max_frames = other.max_frames;
        }
        self
    }
}
