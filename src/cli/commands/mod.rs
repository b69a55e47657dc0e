//! CLI command implementations
//!
//! Each subcommand has its own module with:
//! - Args struct for command-line arguments
//! - `run()` function to execute the command

use crate::app::AppContext;
use crate::cli::Commands;
use crate::error::Result;

pub mod completions;
pub mod docs;
pub mod handbook;
pub mod reference;
pub mod skill;

/// Dispatch a command to its handler
pub fn run(ctx: &AppContext, command: &Commands) -> Result<()> {
    match command {
        Commands::Handbook(args) => handbook::run(ctx, args),
        Commands::Reference(args) => reference::run(ctx, args),
        Commands::Skill(args) => skill::run(ctx, args),
        Commands::Completions(args) => completions::run(ctx, args),
    }
}
