//! Batch command: derive metadata for many subject folders
//!
//! Each path is either a subject folder or, with `--recursive`, a study
//! root searched for subject folders. Subjects fail independently; the
//! command reports every failure and exits non-zero if any occurred.

use colored::Colorize;
use std::collections::BTreeSet;
use std::path::PathBuf;
use tracing::{info, warn};

use super::shared::{CommandSummary, create_progress_bar, print_json, print_record};
use crate::Result;
use crate::cli::args::{BatchArgs, OutputFormat};
use crate::config::ReaderConfig;
use crate::error::BrukerError;
use crate::processor::{BatchReport, find_subject_dirs, process_subjects_with_progress};

pub async fn run_batch(args: BatchArgs) -> Result<CommandSummary> {
    let config = args.to_config()?;
    let dirs = collect_subject_dirs(&args, &config)?;

    if dirs.is_empty() {
        return Err(BrukerError::configuration(
            "No subject folders found in the given paths",
        ));
    }

    info!("Resolved {} subject folders", dirs.len());

    let show_progress = args.output_format == OutputFormat::Human && dirs.len() > 1;
    let pb = show_progress.then(|| create_progress_bar(dirs.len() as u64, "Processing subjects"));

    let report = process_subjects_with_progress(dirs, &config, pb.as_ref()).await;

    if let Some(pb) = &pb {
        pb.finish_and_clear();
    }

    match args.output_format {
        OutputFormat::Human => print_report(&report),
        OutputFormat::Json => print_json(&report)?,
    }

    Ok(CommandSummary {
        processed: report.records.len(),
        errors_encountered: report.failures.len(),
        processing_time: report.elapsed,
    })
}

/// Resolve command line paths into a sorted, deduplicated list of subjects
fn collect_subject_dirs(args: &BatchArgs, config: &ReaderConfig) -> Result<Vec<PathBuf>> {
    if !args.recursive {
        let unique: BTreeSet<PathBuf> = args.paths.iter().cloned().collect();
        return Ok(unique.into_iter().collect());
    }

    let mut dirs = BTreeSet::new();
    for root in &args.paths {
        let found = find_subject_dirs(root, &config.file_names)?;
        if found.is_empty() {
            warn!("No subject folders found under {}", root.display());
        }
        dirs.extend(found);
    }
    Ok(dirs.into_iter().collect())
}

fn print_report(report: &BatchReport) {
    for record in &report.records {
        print_record(record);
        println!();
    }

    if !report.failures.is_empty() {
        println!("{}", "Failed subjects:".red().bold());
        for failure in &report.failures {
            println!("  {} {}", failure.subject.display(), failure.error.red());
        }
        println!();
    }

    let status = if report.is_success() {
        "OK".green().bold()
    } else {
        "FAILED".red().bold()
    };
    println!(
        "{} {} of {} subjects processed in {:.2}s",
        status,
        report.records.len(),
        report.subjects_attempted(),
        report.elapsed.as_secs_f64()
    );
}
