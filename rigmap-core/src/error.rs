//! Error types for rigmap operations.
//!
//! Matching itself is total and never fails; errors only arise at the edges
//! (configuration, runtime-loaded lookup tables, and the CLI's file input).

use thiserror::Error;

/// Result type alias for rigmap operations.
pub type Result<T> = std::result::Result<T, RigmapError>;

/// Core error types for rigmap.
#[derive(Error, Debug)]
pub enum RigmapError {
    /// Acceptance threshold outside [0, 1]
    #[error("acceptance threshold must lie in [0, 1], got {0}")]
    InvalidThreshold(f32),

    /// Recognition fraction outside (0, 1]
    #[error("minimum signature fraction must lie in (0, 1], got {0}")]
    InvalidMinFraction(f32),

    /// Lookup table lists the same source bone twice
    #[error("duplicate source bone in lookup table: {0}")]
    DuplicateTableKey(String),

    /// Lookup table maps two source bones onto the same target bone
    #[error("duplicate target bone in lookup table: {0}")]
    DuplicateTableTarget(String),

    /// Environment variable could not be parsed
    #[error("invalid value for {var}: {value:?}")]
    InvalidEnv { var: &'static str, value: String },

    /// Bad command-line invocation
    #[error("usage: {0}")]
    Usage(String),

    /// IO error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl RigmapError {
    /// Returns true if this error comes from configuration rather than input data.
    #[inline]
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            RigmapError::InvalidThreshold(_)
                | RigmapError::InvalidMinFraction(_)
                | RigmapError::InvalidEnv { .. }
        )
    }
}
