//! Tests for parameter file access

use super::super::reader::{load_parameters, read_parameter_file};
use super::{create_temp_file, create_test_method};
use crate::error::BrukerError;
use crate::models::{ParameterFormat, TypedValue};
use std::path::Path;

#[test]
fn test_read_missing_file() {
    let result = read_parameter_file(Path::new("/nonexistent/subject/method"));
    assert!(matches!(result, Err(BrukerError::FileNotFound { .. })));
}

#[test]
fn test_read_empty_file() {
    let file = create_temp_file("  \n");
    let err = read_parameter_file(file.path()).unwrap_err();

    assert!(matches!(err, BrukerError::EmptyFile { .. }));
    assert!(err.is_structural());
}

#[test]
fn test_read_non_ascii_file() {
    let file = create_temp_file("##$PVM_Comment=caf\u{e9}\n");
    let err = read_parameter_file(file.path()).unwrap_err();

    match err {
        BrukerError::NotAscii { offset, .. } => assert_eq!(offset, 18),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_read_directory_is_io_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let err = read_parameter_file(dir.path()).unwrap_err();
    assert!(err.is_structural());
}

#[test]
fn test_load_parameters() {
    let file = create_temp_file(&create_test_method());
    let projected = load_parameters(file.path(), ParameterFormat::Method).unwrap();

    assert_eq!(projected.get("PVM_NRepetitions"), Some(&TypedValue::Integer(2)));
    assert_eq!(projected.get("PVM_DwNDiffDir"), Some(&TypedValue::Integer(3)));
}
