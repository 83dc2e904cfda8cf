//! Parameter file access
//!
//! Files are read whole as ASCII text. Missing, unreadable, empty or
//! non-ASCII files are structural errors raised before any parsing.

use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, info};

use super::decoder::decode_parameters;
use super::projection::project;
use crate::error::{BrukerError, Result};
use crate::models::{ParameterFormat, ProjectedParameters};

/// Read a parameter file as ASCII text
pub fn read_parameter_file(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => BrukerError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => BrukerError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    if let Some(offset) = bytes.iter().position(|byte| !byte.is_ascii()) {
        return Err(BrukerError::NotAscii {
            path: path.to_path_buf(),
            offset,
        });
    }

    let text = String::from_utf8(bytes).map_err(|e| BrukerError::NotAscii {
        path: path.to_path_buf(),
        offset: e.utf8_error().valid_up_to(),
    })?;

    if text.trim().is_empty() {
        return Err(BrukerError::EmptyFile {
            path: path.to_path_buf(),
        });
    }

    debug!("Read {} bytes from {}", text.len(), path.display());
    Ok(text)
}

/// Read, decode and project one parameter file
pub fn load_parameters(path: &Path, format: ParameterFormat) -> Result<ProjectedParameters> {
    info!("Loading {} parameters: {}", format, path.display());

    let text = read_parameter_file(path)?;
    let raw = decode_parameters(&text, format);
    Ok(project(&raw))
}
