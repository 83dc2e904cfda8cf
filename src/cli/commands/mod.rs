//! Command implementations for the Bruker reader CLI
//!
//! Each subcommand lives in its own module:
//! - `inspect`: one subject folder, full descriptor and gradient table
//! - `batch`: many subject folders processed concurrently
//! - `params`: decoded parameters of a single file

pub mod batch;
pub mod inspect;
pub mod params;
pub mod shared;

pub use shared::CommandSummary;

use crate::Result;
use crate::cli::args::{Args, Commands};

/// Dispatch to the selected subcommand
pub async fn run(args: Args) -> Result<CommandSummary> {
    match args.command {
        Commands::Inspect(inspect_args) => inspect::run_inspect(inspect_args),
        Commands::Batch(batch_args) => batch::run_batch(batch_args).await,
        Commands::Params(params_args) => params::run_params(params_args),
    }
}
