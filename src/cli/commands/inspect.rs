//! Inspect command: derive metadata for one subject folder

use std::time::Instant;
use tracing::info;

use super::shared::{CommandSummary, print_json, print_record};
use crate::Result;
use crate::cli::args::{InspectArgs, OutputFormat};
use crate::processor::process_subject_dir;

pub fn run_inspect(args: InspectArgs) -> Result<CommandSummary> {
    let start = Instant::now();
    let config = args.to_config()?;

    info!("Inspecting subject {}", args.subject.display());
    let record = process_subject_dir(&args.subject, &config)?;

    match args.output_format {
        OutputFormat::Human => print_record(&record),
        OutputFormat::Json => print_json(&record)?,
    }

    Ok(CommandSummary {
        processed: 1,
        errors_encountered: 0,
        processing_time: start.elapsed(),
    })
}
