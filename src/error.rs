//! Error handling for Bruker parameter parsing and acquisition derivation.
//!
//! Structural failures (missing or unreadable files) abort before parsing
//! starts. Undecodable blocks never surface here; they are dropped by the
//! decoder. Derivation failures name the offending key or value.

use crate::models::ParameterFormat;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BrukerError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Parameter file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Parameter file is empty: {path}")]
    EmptyFile { path: PathBuf },

    #[error("Parameter file is not ASCII: {path} (first non-ASCII byte at offset {offset})")]
    NotAscii { path: PathBuf, offset: usize },

    #[error("Missing required field '{key}' in {format} parameters")]
    MissingField {
        key: String,
        format: ParameterFormat,
    },

    #[error("Unknown RECO word type: '{value}'")]
    UnknownEncoding { value: String },

    #[error("Invalid value for field '{key}': {reason}")]
    InvalidField { key: String, reason: String },

    #[error("Subject directory not found: {path}")]
    SubjectNotFound { path: PathBuf },

    #[error("Subject path is not a directory: {path}")]
    NotADirectory { path: PathBuf },

    #[error("No {kind} file found under {path}")]
    SubjectFileMissing { kind: String, path: PathBuf },

    #[error("Invalid search pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Processing interrupted: {reason}")]
    Interrupted { reason: String },
}

impl BrukerError {
    /// Create a missing field error for the given parameter file
    pub fn missing_field(key: impl Into<String>, format: ParameterFormat) -> Self {
        Self::MissingField {
            key: key.into(),
            format,
        }
    }

    /// Create an invalid field error
    pub fn invalid_field(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidField {
            key: key.into(),
            reason: reason.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// True for errors raised before any parameter text was parsed
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            Self::Io { .. } | Self::FileNotFound { .. } | Self::EmptyFile { .. } | Self::NotAscii { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, BrukerError>;
