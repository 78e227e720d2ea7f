//! Error types for holigen
//!
//! Uses `thiserror` for library errors. Every fatal condition names the path
//! it concerns so the CLI can report which input or artifact failed.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for holigen operations
pub type HoligenResult<T> = Result<T, HoligenError>;

/// Main error type for holigen operations
#[derive(Error, Debug)]
pub enum HoligenError {
    /// Country registry file does not exist
    #[error("country registry not found: {path}")]
    RegistryNotFound { path: PathBuf },

    /// Country registry could not be parsed as a table
    #[error("malformed country registry {path}: {message}")]
    RegistryMalformed { path: PathBuf, message: String },

    /// A configured column is absent from a table header
    #[error("column '{column}' not found in header of {path}")]
    MissingColumn { path: PathBuf, column: String },

    /// A holiday source failed for a reason other than an unknown country
    #[error("holiday source for {code} failed: {message}")]
    Source { code: String, message: String },

    /// Configuration fragment has no anchor line to truncate at
    #[error("could not find `{anchor}` in {path}")]
    AnchorNotFound { anchor: String, path: PathBuf },

    /// Reading an input failed
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing an artifact failed
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file is invalid
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Year range floor lies after its end
    #[error("invalid year range: floor {floor} is after end {end}")]
    InvalidYearRange { floor: i32, end: i32 },

    /// Two holiday tables map to the same country code
    #[error("holiday tables {first} and {second} both provide country {code}")]
    DuplicateSource {
        code: String,
        first: PathBuf,
        second: PathBuf,
    },

    /// Anchor key is empty or blank
    #[error("invalid feature anchor '{anchor}': must be a non-blank key")]
    InvalidAnchor { anchor: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl HoligenError {
    /// Stable machine-readable code for JSON output
    pub fn code(&self) -> &'static str {
        match self {
            HoligenError::RegistryNotFound { .. } => "REGISTRY_NOT_FOUND",
            HoligenError::RegistryMalformed { .. } => "REGISTRY_MALFORMED",
            HoligenError::MissingColumn { .. } => "MISSING_COLUMN",
            HoligenError::Source { .. } => "SOURCE_FAILED",
            HoligenError::AnchorNotFound { .. } => "ANCHOR_NOT_FOUND",
            HoligenError::Read { .. } => "READ_FAILED",
            HoligenError::Write { .. } => "WRITE_FAILED",
            HoligenError::InvalidConfig { .. } => "INVALID_CONFIG",
            HoligenError::InvalidYearRange { .. } => "INVALID_YEAR_RANGE",
            HoligenError::DuplicateSource { .. } => "DUPLICATE_SOURCE",
            HoligenError::InvalidAnchor { .. } => "INVALID_ANCHOR",
            HoligenError::Io(_) => "IO_ERROR",
        }
    }

    /// Suggested fix, when there is an obvious one
    pub fn help(&self) -> Option<String> {
        match self {
            HoligenError::AnchorNotFound { anchor, path } => Some(format!(
                "add a line `{} = []` to {} where the generated entries should start",
                anchor,
                path.display()
            )),
            HoligenError::MissingColumn { .. } => {
                Some("set [registry] code_column / name_column in holigen.toml".to_string())
            }
            HoligenError::DuplicateSource { second, .. } => Some(format!(
                "remove or rename {} so each country has one table",
                second.display()
            )),
            HoligenError::InvalidAnchor { .. } => {
                Some("set [features] anchor to the key of the aggregate entry".to_string())
            }
            _ => None,
        }
    }
}
