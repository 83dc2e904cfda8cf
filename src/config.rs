//! Configuration for subject discovery and batch processing.
//!
//! Parsing and derivation are pure functions; the settings here only
//! control where subject files are looked for, how B0 images are
//! identified, and how many subjects are processed concurrently.

use crate::constants::{
    ACQ_PARAMS_FILE_SUFFIX, DEFAULT_WORKERS, MAX_WORKERS, METHOD_FILE_SUFFIX,
    PIXEL_DATA_FILE_SUFFIX, RECO_FILE_SUFFIX,
};
use crate::error::{BrukerError, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// How non-diffusion-weighted (B0) images are located in the b-value table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum B0Strategy {
    /// Every b-value equal to zero is a B0 image
    #[default]
    ZeroBValue,
    /// The first `PVM_DwAoImages` entries are B0 images
    AoImagesCount,
}

/// File name suffixes matched when discovering a subject's files
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectFileNames {
    pub method: String,
    pub reco: String,
    pub pixel_data: String,
    pub acq_params: String,
}

impl Default for SubjectFileNames {
    fn default() -> Self {
        Self {
            method: METHOD_FILE_SUFFIX.to_string(),
            reco: RECO_FILE_SUFFIX.to_string(),
            pixel_data: PIXEL_DATA_FILE_SUFFIX.to_string(),
            acq_params: ACQ_PARAMS_FILE_SUFFIX.to_string(),
        }
    }
}

impl SubjectFileNames {
    /// (kind, suffix) pairs in discovery order
    pub fn entries(&self) -> [(&'static str, &str); 4] {
        [
            ("method", self.method.as_str()),
            ("reco", self.reco.as_str()),
            ("2dseq", self.pixel_data.as_str()),
            ("acqp", self.acq_params.as_str()),
        ]
    }
}

/// Settings for reading subject folders
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReaderConfig {
    /// Number of subjects processed concurrently in batch mode
    pub workers: usize,

    /// B0 identification rule
    pub b0_strategy: B0Strategy,

    /// Subject file discovery patterns
    pub file_names: SubjectFileNames,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            workers: DEFAULT_WORKERS.min(num_cpus::get().max(1)),
            b0_strategy: B0Strategy::default(),
            file_names: SubjectFileNames::default(),
        }
    }
}

impl ReaderConfig {
    /// Set the number of concurrent subject pipelines
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    /// Set the B0 identification rule
    pub fn with_b0_strategy(mut self, strategy: B0Strategy) -> Self {
        self.b0_strategy = strategy;
        self
    }

    /// Override the subject file name suffixes
    pub fn with_file_names(mut self, file_names: SubjectFileNames) -> Self {
        self.file_names = file_names;
        self
    }

    /// Check settings for consistency
    pub fn validate(&self) -> Result<()> {
        if self.workers == 0 {
            return Err(BrukerError::configuration(
                "Number of workers must be greater than 0",
            ));
        }

        if self.workers > MAX_WORKERS {
            return Err(BrukerError::configuration(format!(
                "Number of workers cannot exceed {}",
                MAX_WORKERS
            )));
        }

        for (kind, suffix) in self.file_names.entries() {
            if suffix.trim().is_empty() {
                return Err(BrukerError::configuration(format!(
                    "File name suffix for {} must not be empty",
                    kind
                )));
            }
        }

        debug!("Configuration validated: {:?}", self);
        Ok(())
    }
}
