//! CLI module - Command-line interface definitions and handlers
//!
//! Uses clap v4 with derive macros for argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub mod commands;
pub mod output;

/// Search WordPress developer documentation and package skills
#[derive(Parser, Debug)]
#[command(name = "wpdocs")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable machine-readable JSON output, including errors
    #[arg(long, global = true)]
    pub robot: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Config file path (default: ~/.config/wpdocs/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search and read the WordPress handbooks
    Handbook(commands::handbook::HandbookArgs),

    /// Search and read the WordPress code reference
    Reference(commands::reference::ReferenceArgs),

    /// Scaffold and package skill directories
    Skill(commands::skill::SkillArgs),

    /// Generate shell completion scripts
    Completions(commands::completions::CompletionsArgs),
}
