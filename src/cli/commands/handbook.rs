//! wpdocs handbook - WordPress handbook documentation.

use clap::{Args, Subcommand};

use crate::app::AppContext;
use crate::cli::commands::docs::{SearchDocsArgs, positive_id, run_search};
use crate::cli::output::emit_json;
use crate::docs::{DocDomain, DocsClient};
use crate::error::Result;

#[derive(Args, Debug)]
pub struct HandbookArgs {
    #[command(subcommand)]
    pub command: HandbookCommand,
}

#[derive(Subcommand, Debug)]
pub enum HandbookCommand {
    /// Search handbook documentation
    Search(SearchDocsArgs),

    /// Get a handbook document as Markdown
    Get(HandbookGetArgs),
}

#[derive(Args, Debug)]
pub struct HandbookGetArgs {
    /// Handbook type (e.g. plugin-handbook, theme-handbook)
    pub subtype: String,

    /// Document ID from search results
    pub id: i64,
}

pub fn run(ctx: &AppContext, args: &HandbookArgs) -> Result<()> {
    match &args.command {
        HandbookCommand::Search(search) => run_search(ctx, DocDomain::Handbook, search),
        HandbookCommand::Get(get) => run_get(ctx, get),
    }
}

fn run_get(ctx: &AppContext, args: &HandbookGetArgs) -> Result<()> {
    let id = positive_id(args.id)?;
    let client = DocsClient::new(&ctx.config.api)?;
    let doc = client.handbook_content(&args.subtype, id)?;

    if ctx.robot_mode {
        return emit_json(&serde_json::json!({
            "status": "ok",
            "document": doc,
        }));
    }
    emit_json(&doc)
}
