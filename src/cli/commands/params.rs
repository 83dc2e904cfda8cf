//! Params command: print the decoded parameters of a single file

use colored::Colorize;
use std::collections::BTreeMap;
use std::time::Instant;
use tracing::info;

use super::shared::{CommandSummary, print_json};
use crate::Result;
use crate::cli::args::{OutputFormat, ParamsArgs};
use crate::models::{ParameterFormat, TypedValue};
use crate::parser::{coerce, decode_parameters, project, read_parameter_file};

pub fn run_params(args: ParamsArgs) -> Result<CommandSummary> {
    let start = Instant::now();
    let format = ParameterFormat::from(args.kind);

    let text = read_parameter_file(&args.file)?;
    let raw = decode_parameters(&text, format);

    // Without --all only the recognized keys are shown
    let params: BTreeMap<String, TypedValue> = if args.all {
        raw.iter().map(|(key, value)| (key.clone(), coerce(value))).collect()
    } else {
        project(&raw)
            .iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    };

    info!(
        "Decoded {} parameters from {} ({} shown)",
        raw.len(),
        args.file.display(),
        params.len()
    );

    match args.output_format {
        OutputFormat::Json => print_json(&params)?,
        OutputFormat::Human => {
            println!(
                "{} {} ({} parameters)",
                format.to_string().bold(),
                args.file.display(),
                params.len()
            );
            let width = params.keys().map(String::len).max().unwrap_or(0);
            for (key, value) in &params {
                let padded = format!("{:<width$}", key, width = width);
                println!("  {}  {}", padded.bright_cyan(), value);
            }
        }
    }

    Ok(CommandSummary {
        processed: 1,
        errors_encountered: 0,
        processing_time: start.elapsed(),
    })
}
