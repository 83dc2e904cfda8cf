//! Subject folder discovery
//!
//! A ParaVision scan folder keeps its method and acqp files at the top and
//! the reconstruction under `pdata/<n>/`:
//! ```text
//! scan/
//!   acqp
//!   method
//!   pdata/
//!     1/
//!       2dseq
//!       reco
//! ```

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

use crate::config::SubjectFileNames;
use crate::error::{BrukerError, Result};
use crate::models::SubjectPaths;

/// Locate the four subject files below `dir`.
///
/// Each file is the first match of `**/*<suffix>` in path order.
pub fn discover_subject(dir: &Path, names: &SubjectFileNames) -> Result<SubjectPaths> {
    if !dir.exists() {
        return Err(BrukerError::SubjectNotFound {
            path: dir.to_path_buf(),
        });
    }
    if !dir.is_dir() {
        return Err(BrukerError::NotADirectory {
            path: dir.to_path_buf(),
        });
    }

    let method = find_subject_file(dir, "method", &names.method)?;
    let reco = find_subject_file(dir, "reco", &names.reco)?;
    let pixel_data = find_subject_file(dir, "2dseq", &names.pixel_data)?;
    let acq_params = find_subject_file(dir, "acqp", &names.acq_params)?;

    debug!(
        "Discovered subject files under {}: method={}, reco={}",
        dir.display(),
        method.display(),
        reco.display()
    );

    Ok(SubjectPaths {
        method,
        reco,
        pixel_data,
        acq_params,
    })
}

fn find_subject_file(dir: &Path, kind: &str, suffix: &str) -> Result<PathBuf> {
    let pattern = format!(
        "{}/**/*{}",
        glob::Pattern::escape(&dir.to_string_lossy()),
        glob::Pattern::escape(suffix)
    );

    let mut matches: Vec<PathBuf> = glob::glob(&pattern)
        .map_err(|source| BrukerError::Pattern {
            pattern: pattern.clone(),
            source,
        })?
        .filter_map(|entry| entry.ok())
        .filter(|path| path.is_file())
        .collect();
    matches.sort();

    matches
        .into_iter()
        .next()
        .ok_or_else(|| BrukerError::SubjectFileMissing {
            kind: kind.to_string(),
            path: dir.to_path_buf(),
        })
}

/// Find every folder below `root` that directly holds a method file
pub fn find_subject_dirs(root: &Path, names: &SubjectFileNames) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(BrukerError::NotADirectory {
            path: root.to_path_buf(),
        });
    }

    let subjects: BTreeSet<PathBuf> = WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| {
            entry
                .file_name()
                .to_str()
                .is_some_and(|name| name.ends_with(names.method.as_str()))
        })
        .filter_map(|entry| entry.path().parent().map(Path::to_path_buf))
        .collect();

    debug!(
        "Found {} subject folders under {}",
        subjects.len(),
        root.display()
    );

    Ok(subjects.into_iter().collect())
}
