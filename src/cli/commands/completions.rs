//! wpdocs completions - shell completion scripts.

use clap::{Args, CommandFactory};
use clap_complete::Shell;

use crate::app::AppContext;
use crate::cli::Cli;
use crate::error::Result;

#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Target shell
    #[arg(value_enum)]
    pub shell: Shell,
}

pub fn run(_ctx: &AppContext, args: &CompletionsArgs) -> Result<()> {
    let mut command = Cli::command();
    clap_complete::generate(args.shell, &mut command, "wpdocs", &mut std::io::stdout());
    Ok(())
}
