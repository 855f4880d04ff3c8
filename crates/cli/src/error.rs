//! Structured CLI errors with meaningful exit codes.
//!
//! Exit code scheme:
//! - 0:  success
//! - 1:  usage printed (`--help`, `--version`)
//! - 2:  clap arg parse error
//! - 10: drawing error (bad family parameters, bad dimensions)
//! - 11: I/O error (missing output directory, PNG write)
//! - 12: input error (unknown kind, bad palette, bad JSON params, prompts)
//! - 13: serialization error

use snowflake_core::SnowflakeError;
use std::fmt;

/// Exit code used after printing usage text.
pub const USAGE_EXIT_CODE: i32 = 1;

/// Errors produced by CLI operations, each mapped to a distinct exit code.
#[derive(Debug)]
pub enum CliError {
    /// A drawing-level error (invalid parameters, bad canvas size).
    Draw(SnowflakeError),
    /// An I/O error (missing directory, file write).
    Io(String),
    /// A user input error (unknown kind, bad palette, bad JSON params).
    Input(String),
    /// A serialization error (JSON output failure).
    Serialization(String),
}

impl CliError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Draw(_) => 10,
            CliError::Io(_) => 11,
            CliError::Input(_) => 12,
            CliError::Serialization(_) => 13,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Draw(e) => write!(f, "{e}"),
            CliError::Io(msg) => write!(f, "{msg}"),
            CliError::Input(msg) => write!(f, "{msg}"),
            CliError::Serialization(msg) => write!(f, "{msg}"),
        }
    }
}

impl From<SnowflakeError> for CliError {
    fn from(e: SnowflakeError) -> Self {
        match e {
            SnowflakeError::Io(msg) => CliError::Io(msg),
            SnowflakeError::MissingDirectory(_) => CliError::Io(e.to_string()),
            SnowflakeError::UnknownKind(_)
            | SnowflakeError::InvalidColor(_)
            | SnowflakeError::InvalidPalette(_) => CliError::Input(e.to_string()),
            other => CliError::Draw(other),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Serialization(e.to_string())
    }
}
