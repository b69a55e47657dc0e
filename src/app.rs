//! Application context shared by all commands.

use crate::cli::Cli;
use crate::config::Config;
use crate::error::Result;

/// Resolved runtime state handed to every command handler.
#[derive(Debug, Clone)]
pub struct AppContext {
    pub config: Config,
    /// Machine-readable JSON output on stdout.
    pub robot_mode: bool,
}

impl AppContext {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let config = Config::load(cli.config.as_deref())?;
        Ok(Self {
            config,
            robot_mode: cli.robot,
        })
    }
}
