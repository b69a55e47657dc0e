//! Shared handling for the two documentation domains.

use clap::Args;

use crate::app::AppContext;
use crate::cli::output::emit_json;
use crate::docs::domain::parse_subtype_list;
use crate::docs::{DocDomain, DocsClient};
use crate::error::{Result, WpDocsError};

#[derive(Args, Debug)]
pub struct SearchDocsArgs {
    /// Search keywords
    pub query: String,

    /// Comma-separated subtype filters
    #[arg(long, short)]
    pub subtype: Option<String>,

    /// Number of results (clamped to 1-100)
    #[arg(long, short, default_value = "5")]
    pub per_page: u32,
}

pub fn run_search(ctx: &AppContext, domain: DocDomain, args: &SearchDocsArgs) -> Result<()> {
    let subtypes = args
        .subtype
        .as_deref()
        .map(parse_subtype_list)
        .unwrap_or_default();

    let client = DocsClient::new(&ctx.config.api)?;
    let results = client.search(domain, &args.query, &subtypes, args.per_page)?;

    if ctx.robot_mode {
        return emit_json(&serde_json::json!({
            "status": "ok",
            "count": results.len(),
            "results": results,
        }));
    }

    if results.is_empty() {
        println!("No results found. Try different keywords.");
        return Ok(());
    }
    emit_json(&results)
}

/// Validate a CLI identifier before any request goes out.
pub fn positive_id(raw: i64) -> Result<u64> {
    u64::try_from(raw)
        .ok()
        .filter(|id| *id >= 1)
        .ok_or_else(|| WpDocsError::InvalidInput("id must be a positive integer".to_string()))
}
