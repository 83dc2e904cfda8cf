//! Subject processing pipeline
//!
//! One subject is one atomic unit of work: read both parameter files,
//! project them, and derive the acquisition descriptor and gradient table.
//! Any failure discards the whole subject. Batches run independent
//! subjects concurrently and collect failures per subject.

pub mod discovery;

#[cfg(test)]
mod tests;

use futures::stream::{self, StreamExt};
use indicatif::ProgressBar;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tokio::task;
use tracing::{debug, info, warn};

use crate::acquisition::{derive_acquisition, derive_gradient_table};
use crate::config::ReaderConfig;
use crate::error::Result;
use crate::models::{AcquisitionRecord, ParameterFormat, SubjectPaths};
use crate::parser::load_parameters;

pub use discovery::{discover_subject, find_subject_dirs};

/// Parse and derive everything for one subject's files
pub fn process_subject(paths: &SubjectPaths, config: &ReaderConfig) -> Result<AcquisitionRecord> {
    let method = load_parameters(&paths.method, ParameterFormat::Method)?;
    let reco = load_parameters(&paths.reco, ParameterFormat::Reco)?;

    let descriptor = derive_acquisition(&reco, &method)?;
    let gradients = derive_gradient_table(&method, config.b0_strategy)?;

    Ok(AcquisitionRecord {
        paths: paths.clone(),
        descriptor,
        gradients,
    })
}

/// Discover a subject's files below `dir`, then process them
pub fn process_subject_dir(dir: &Path, config: &ReaderConfig) -> Result<AcquisitionRecord> {
    let paths = discover_subject(dir, &config.file_names)?;
    process_subject(&paths, config)
}

/// A subject that could not be processed
#[derive(Debug, Clone, Serialize)]
pub struct SubjectFailure {
    pub subject: PathBuf,
    pub error: String,
}

/// Outcome of a batch run
#[derive(Debug, Default, Serialize)]
pub struct BatchReport {
    pub records: Vec<AcquisitionRecord>,
    pub failures: Vec<SubjectFailure>,
    #[serde(skip)]
    pub elapsed: std::time::Duration,
}

impl BatchReport {
    pub fn subjects_attempted(&self) -> usize {
        self.records.len() + self.failures.len()
    }

    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Process many subject folders concurrently
pub async fn process_subjects(dirs: Vec<PathBuf>, config: &ReaderConfig) -> BatchReport {
    process_subjects_with_progress(dirs, config, None).await
}

/// Process many subject folders, advancing `progress` as each one finishes.
///
/// Each subject runs on the blocking pool; at most `config.workers` run at
/// once. A failing subject never affects the others.
pub async fn process_subjects_with_progress(
    dirs: Vec<PathBuf>,
    config: &ReaderConfig,
    progress: Option<&ProgressBar>,
) -> BatchReport {
    let start_time = Instant::now();
    let workers = config.workers.max(1);
    info!(
        "Processing {} subjects with {} workers",
        dirs.len(),
        workers
    );

    let outcomes = stream::iter(dirs)
        .map(|dir| {
            let config = config.clone();
            async move {
                let task_dir = dir.clone();
                let outcome =
                    task::spawn_blocking(move || process_subject_dir(&task_dir, &config)).await;
                (dir, outcome)
            }
        })
        .buffer_unordered(workers)
        .inspect(|_| {
            if let Some(pb) = progress {
                pb.inc(1);
            }
        })
        .collect::<Vec<_>>()
        .await;

    let mut report = BatchReport::default();
    for (dir, outcome) in outcomes {
        match outcome {
            Ok(Ok(record)) => {
                debug!("Processed subject {}", dir.display());
                report.records.push(record);
            }
            Ok(Err(e)) => {
                warn!("Subject {} failed: {}", dir.display(), e);
                report.failures.push(SubjectFailure {
                    subject: dir,
                    error: e.to_string(),
                });
            }
            Err(e) => {
                warn!("Subject {} task aborted: {}", dir.display(), e);
                report.failures.push(SubjectFailure {
                    subject: dir,
                    error: format!("Processing task failed: {}", e),
                });
            }
        }
    }

    report
        .records
        .sort_by(|a, b| a.paths.method.cmp(&b.paths.method));
    report.failures.sort_by(|a, b| a.subject.cmp(&b.subject));
    report.elapsed = start_time.elapsed();

    info!(
        "Batch complete in {:.2}s: {} processed, {} failed",
        report.elapsed.as_secs_f64(),
        report.records.len(),
        report.failures.len()
    );

    report
}
