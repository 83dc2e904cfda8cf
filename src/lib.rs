//! Bruker Reader Library
//!
//! A Rust library for reading Bruker ParaVision MRI parameter files and
//! deriving diffusion acquisition metadata from them.
//!
//! This library provides tools for:
//! - Decoding `method` and `reco` parameter files into typed key/value maps
//! - Projecting decoded parameters onto the recognized key set
//! - Deriving image dimensions, voxel size and pixel encoding
//! - Building the diffusion gradient table with B0 image indices
//! - Discovering and processing subject folders concurrently

pub mod acquisition;
pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod parser;
pub mod processor;

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use acquisition::{derive_acquisition, derive_gradient_table};
pub use config::{B0Strategy, ReaderConfig};
pub use error::{BrukerError, Result};
pub use models::{
    AcquisitionDescriptor, AcquisitionRecord, GradientTable, ParameterFormat, PixelEncoding,
    ProjectedParameters, RawParameters, RawValue, SubjectPaths, TypedValue,
};
pub use parser::{decode_parameters, load_parameters, project};
pub use processor::{process_subject, process_subject_dir, process_subjects};
