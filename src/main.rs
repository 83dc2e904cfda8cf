use bruker_reader::BrukerError;
use bruker_reader::cli::{
    args::Args,
    commands::{self, shared::setup_logging},
};
use clap::Parser;
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    if let Err(error) = setup_logging(&args) {
        eprintln!("Failed to initialize logging: {}", error);
        process::exit(1);
    }

    // Create async runtime and run the command with signal handling
    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let result = runtime.block_on(async {
        let shutdown_signal = async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                eprintln!("Failed to install CTRL+C signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        };

        tokio::select! {
            result = commands::run(args) => result,
            _ = shutdown_signal => {
                eprintln!("\nReceived CTRL+C, shutting down...");
                Err(BrukerError::Interrupted {
                    reason: "Processing interrupted by user".to_string(),
                })
            }
        }
    });

    match result {
        Ok(summary) if summary.is_success() => process::exit(0),
        Ok(summary) => {
            eprintln!(
                "Error: {} of {} subjects failed",
                summary.errors_encountered,
                summary.processed + summary.errors_encountered
            );
            process::exit(1);
        }
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}
