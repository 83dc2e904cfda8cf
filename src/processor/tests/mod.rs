//! Pipeline tests for the processor module
//!
//! Subjects are built as ParaVision-style scan folders in a temporary
//! directory using the parser fixtures.

use std::fs;
use std::path::{Path, PathBuf};

use crate::parser::tests::{create_test_method, create_test_reco};


/// Create a scan folder with the given method and reco contents
pub fn create_subject(root: &Path, name: &str, method: &str, reco: &str) -> PathBuf {
    let scan = root.join(name);
    let pdata = scan.join("pdata").join("1");
    fs::create_dir_all(&pdata).unwrap();
    fs::write(scan.join("method"), method).unwrap();
    fs::write(scan.join("acqp"), "##$ACQ_method=<Bruker:DtiEpi>\n##END=\n").unwrap();
    fs::write(pdata.join("reco"), reco).unwrap();
    fs::write(pdata.join("2dseq"), vec![0u8; 64]).unwrap();
    scan
}

/// Create a scan folder from the standard diffusion fixtures
pub fn create_valid_subject(root: &Path, name: &str) -> PathBuf {
    create_subject(root, name, &create_test_method(), &create_test_reco())
}
