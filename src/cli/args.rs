//! Command-line argument definitions for the Bruker reader
//!
//! This module defines the CLI interface using the clap derive API.

use crate::config::{B0Strategy, ReaderConfig};
use crate::constants::MAX_WORKERS;
use crate::error::{BrukerError, Result};
use crate::models::ParameterFormat;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the Bruker parameter reader
///
/// Reads ParaVision method and reco files and reports the derived image
/// geometry, pixel encoding and diffusion gradient table.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "bruker-reader",
    version,
    about = "Derive diffusion MRI acquisition metadata from Bruker ParaVision parameter files",
    long_about = "Parses the method and reco parameter files of Bruker ParaVision scans and \
                  derives image dimensions, voxel size, repetition counts, b-value and \
                  diffusion direction tables, and pixel encoding."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        global = true,
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress log output except errors
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        help = "Suppress log output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Derive acquisition metadata for one subject folder
    Inspect(InspectArgs),
    /// Derive acquisition metadata for many subject folders concurrently
    Batch(BatchArgs),
    /// Print the parameters decoded from a single method or reco file
    Params(ParamsArgs),
}

/// Arguments for the inspect command
#[derive(Debug, Clone, Parser)]
pub struct InspectArgs {
    /// Subject folder containing method, acqp and pdata/<n>/{reco,2dseq}
    #[arg(value_name = "SUBJECT")]
    pub subject: PathBuf,

    /// B0 identification rule
    #[arg(long = "b0", value_enum, default_value = "zero-b-value")]
    pub b0_rule: B0Rule,

    /// Output format
    #[arg(long = "format", value_enum, default_value = "human")]
    pub output_format: OutputFormat,
}

/// Arguments for the batch command
#[derive(Debug, Clone, Parser)]
pub struct BatchArgs {
    /// Subject folders, or study roots when --recursive is given
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<PathBuf>,

    /// Search each path for subject folders holding a method file
    #[arg(short = 'r', long = "recursive")]
    pub recursive: bool,

    /// Number of subjects processed concurrently
    #[arg(short = 'j', long = "workers", value_name = "COUNT")]
    pub workers: Option<usize>,

    /// B0 identification rule
    #[arg(long = "b0", value_enum, default_value = "zero-b-value")]
    pub b0_rule: B0Rule,

    /// Output format
    #[arg(long = "format", value_enum, default_value = "human")]
    pub output_format: OutputFormat,
}

/// Arguments for the params command
#[derive(Debug, Clone, Parser)]
pub struct ParamsArgs {
    /// Path to a method or reco file
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Which parameter file layout to decode
    #[arg(short = 'k', long = "kind", value_enum)]
    pub kind: FileKind,

    /// Show every decoded parameter instead of only recognized ones
    #[arg(long = "all")]
    pub all: bool,

    /// Output format
    #[arg(long = "format", value_enum, default_value = "human")]
    pub output_format: OutputFormat,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
}

/// B0 identification rules selectable on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum B0Rule {
    /// Every zero b-value is a B0 image
    #[value(name = "zero-b-value")]
    ZeroBValue,
    /// The first PVM_DwAoImages b-values are B0 images
    #[value(name = "ao-images")]
    AoImages,
}

impl From<B0Rule> for B0Strategy {
    fn from(rule: B0Rule) -> Self {
        match rule {
            B0Rule::ZeroBValue => B0Strategy::ZeroBValue,
            B0Rule::AoImages => B0Strategy::AoImagesCount,
        }
    }
}

/// Parameter file kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FileKind {
    Method,
    Reco,
}

impl From<FileKind> for ParameterFormat {
    fn from(kind: FileKind) -> Self {
        match kind {
            FileKind::Method => ParameterFormat::Method,
            FileKind::Reco => ParameterFormat::Reco,
        }
    }
}

impl Args {
    /// Log level implied by the verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

impl InspectArgs {
    pub fn to_config(&self) -> Result<ReaderConfig> {
        let config = ReaderConfig::default().with_b0_strategy(self.b0_rule.into());
        config.validate()?;
        Ok(config)
    }
}

impl BatchArgs {
    /// Validate the batch arguments and build the reader configuration
    pub fn to_config(&self) -> Result<ReaderConfig> {
        let mut config = ReaderConfig::default().with_b0_strategy(self.b0_rule.into());

        if let Some(workers) = self.workers {
            if workers == 0 || workers > MAX_WORKERS {
                return Err(BrukerError::configuration(format!(
                    "Number of workers must be between 1 and {}",
                    MAX_WORKERS
                )));
            }
            config = config.with_workers(workers);
        }

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_inspect() {
        let args = Args::try_parse_from(["bruker-reader", "inspect", "/data/scan3", "--format", "json"])
            .unwrap();

        match args.command {
            Commands::Inspect(inspect) => {
                assert_eq!(inspect.subject, PathBuf::from("/data/scan3"));
                assert_eq!(inspect.output_format, OutputFormat::Json);
                assert_eq!(inspect.b0_rule, B0Rule::ZeroBValue);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_batch_with_workers() {
        let args = Args::try_parse_from([
            "bruker-reader",
            "batch",
            "-r",
            "-j",
            "8",
            "--b0",
            "ao-images",
            "/data/a",
            "/data/b",
        ])
        .unwrap();

        match args.command {
            Commands::Batch(batch) => {
                assert!(batch.recursive);
                assert_eq!(batch.paths.len(), 2);
                let config = batch.to_config().unwrap();
                assert_eq!(config.workers, 8);
                assert_eq!(config.b0_strategy, B0Strategy::AoImagesCount);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_batch_zero_workers_rejected() {
        let args = Args::try_parse_from(["bruker-reader", "batch", "-j", "0", "/data/a"]).unwrap();
        match args.command {
            Commands::Batch(batch) => assert!(batch.to_config().is_err()),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_params_requires_kind() {
        assert!(Args::try_parse_from(["bruker-reader", "params", "/data/method"]).is_err());

        let args =
            Args::try_parse_from(["bruker-reader", "params", "/data/method", "-k", "method", "--all"])
                .unwrap();
        match args.command {
            Commands::Params(params) => {
                assert_eq!(ParameterFormat::from(params.kind), ParameterFormat::Method);
                assert!(params.all);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_log_level() {
        let args = Args::try_parse_from(["bruker-reader", "-vv", "inspect", "/data/scan3"]).unwrap();
        assert_eq!(args.get_log_level(), "debug");

        let args = Args::try_parse_from(["bruker-reader", "inspect", "-q", "/data/scan3"]).unwrap();
        assert_eq!(args.get_log_level(), "error");
    }
}
