//! Error types for the snowflake core.

use thiserror::Error;

/// Errors produced by geometry, configuration, drawing, and persistence.
#[derive(Debug, Error)]
pub enum SnowflakeError {
    /// Width or height was zero (or overflowed) when creating a raster.
    #[error("invalid dimensions: width and height must be non-zero")]
    InvalidDimensions,

    /// A zero-length vector was normalized.
    #[error("divide by zero: cannot normalize a zero-length vector")]
    DivideByZero,

    /// A symmetry group was requested with zero folds.
    #[error("invalid fold count {0}: must be at least 1")]
    InvalidFoldCount(u32),

    /// A drawer parameter held a value outside its valid domain.
    #[error("invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    /// A snowflake kind name was not recognized.
    #[error("unknown snowflake kind: {0}")]
    UnknownKind(String),

    /// A color string could not be parsed.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// A palette could not be constructed or looked up.
    #[error("invalid palette: {0}")]
    InvalidPalette(String),

    /// The parent directory of an output path does not exist.
    #[error("directory does not exist: {0}")]
    MissingDirectory(String),

    /// Encoding or writing an image failed.
    #[error("i/o error: {0}")]
    Io(String),
}

impl SnowflakeError {
    /// Shorthand for [`SnowflakeError::InvalidParameter`].
    pub fn invalid_param(name: &str, reason: impl Into<String>) -> Self {
        SnowflakeError::InvalidParameter {
            name: name.to_string(),
            reason: reason.into(),
        }
    }
}
