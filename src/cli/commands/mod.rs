//! CLI command implementations
//!
//! Each subcommand has its own module with:
//! - Args struct for command-line arguments
//! - `run()` function to execute the command

use crate::app::AppContext;
use crate::cli::Commands;
use crate::error::Result;

pub mod calculate;
pub mod config;
pub mod serve;
pub mod sizes;

/// Dispatch a command to its handler
pub fn run(ctx: &AppContext, command: &Commands) -> Result<()> {
    match command {
        Commands::Calculate(args) => calculate::run(ctx, args),
        Commands::Sizes(args) => sizes::run(ctx, args),
        Commands::Serve(args) => serve::run(ctx, args),
        Commands::Config(args) => config::run(ctx, args),
    }
}
