//! wpdocs reference - WordPress code reference.

use clap::{Args, Subcommand};

use crate::app::AppContext;
use crate::cli::commands::docs::{SearchDocsArgs, positive_id, run_search};
use crate::cli::output::emit_json;
use crate::docs::{DocDomain, DocsClient};
use crate::error::Result;

#[derive(Args, Debug)]
pub struct ReferenceArgs {
    #[command(subcommand)]
    pub command: ReferenceCommand,
}

#[derive(Subcommand, Debug)]
pub enum ReferenceCommand {
    /// Search the code reference
    Search(SearchDocsArgs),

    /// Get a code reference entry
    Get(ReferenceGetArgs),
}

#[derive(Args, Debug)]
pub struct ReferenceGetArgs {
    /// Reference type: wp-parser-function, wp-parser-hook, wp-parser-class, wp-parser-method
    pub subtype: String,

    /// Document ID from search results
    pub id: i64,
}

pub fn run(ctx: &AppContext, args: &ReferenceArgs) -> Result<()> {
    match &args.command {
        ReferenceCommand::Search(search) => run_search(ctx, DocDomain::CodeReference, search),
        ReferenceCommand::Get(get) => run_get(ctx, get),
    }
}

fn run_get(ctx: &AppContext, args: &ReferenceGetArgs) -> Result<()> {
    let id = positive_id(args.id)?;
    let client = DocsClient::new(&ctx.config.api)?;
    let doc = client.reference_content(&args.subtype, id)?;

    if ctx.robot_mode {
        return emit_json(&serde_json::json!({
            "status": "ok",
            "document": doc,
        }));
    }
    emit_json(&doc)
}
