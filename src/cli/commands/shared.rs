//! Shared components for CLI commands
//!
//! Logging setup, progress reporting and output formatting used by more
//! than one subcommand.

use crate::Result;
use crate::cli::args::Args;
use crate::models::AcquisitionRecord;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use tracing::debug;

/// Outcome of a command, used for the process exit code
#[derive(Debug, Clone, Default)]
pub struct CommandSummary {
    /// Number of subjects or files successfully processed
    pub processed: usize,
    /// Number of subjects or files that failed
    pub errors_encountered: usize,
    /// Total processing time
    pub processing_time: std::time::Duration,
}

impl CommandSummary {
    pub fn is_success(&self) -> bool {
        self.errors_encountered == 0
    }
}

/// Set up structured logging on stderr
pub fn setup_logging(args: &Args) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("bruker_reader={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_timer(fmt::time::uptime())
                .with_writer(std::io::stderr),
        )
        .init();

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Create a progress bar for subject processing
pub fn create_progress_bar(total: u64, message: &str) -> ProgressBar {
    let pb = ProgressBar::new(total);
    let style = ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("#>-");
    pb.set_style(style);
    pb.set_message(message.to_string());
    pb
}

/// Print a value as pretty JSON on stdout
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print one subject's derived metadata for humans
pub fn print_record(record: &AcquisitionRecord) {
    let descriptor = &record.descriptor;
    let gradients = &record.gradients;
    let [x, y, z, b_count, directions] = descriptor.dimensions;

    println!("{}", record.paths.method.display().to_string().bold());
    println!(
        "  {} {} x {} x {} ({} b-values, {} directions)",
        "Dimensions:".bright_cyan(),
        x,
        y,
        z,
        b_count,
        directions
    );
    println!(
        "  {} {:.4} x {:.4} x {:.4} mm",
        "Voxel size:".bright_cyan(),
        descriptor.voxel_size[0],
        descriptor.voxel_size[1],
        descriptor.voxel_size[2]
    );
    println!(
        "  {} {} ({} bytes per sample)",
        "Pixel type:".bright_cyan(),
        descriptor.pixel_encoding,
        descriptor.pixel_encoding.byte_width()
    );
    println!(
        "  {} {}",
        "Repetitions:".bright_cyan(),
        descriptor.repetitions
    );
    println!(
        "  {} {:?}",
        "B-values:".bright_cyan(),
        descriptor.b_values
    );
    println!(
        "  {} {} declared, at {:?}",
        "B0 images:".bright_cyan(),
        descriptor.b0_count,
        gradients.b0_indices
    );
    println!(
        "  {} {}",
        "Pixel data:".bright_cyan(),
        record.paths.pixel_data.display()
    );

    for (index, [gx, gy, gz]) in gradients.directions.iter().enumerate() {
        println!("    {:>3}: {:>9.5} {:>9.5} {:>9.5}", index, gx, gy, gz);
    }
}
