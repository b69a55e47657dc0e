//! Output helpers shared by command handlers.

use serde::Serialize;

use crate::error::{Result, WpDocsError};

/// Pretty-print a JSON payload to stdout.
pub fn emit_json<T: Serialize>(value: &T) -> Result<()> {
    let payload = serde_json::to_string_pretty(value)
        .map_err(|err| WpDocsError::Config(format!("serialize output: {err}")))?;
    println!("{payload}");
    Ok(())
}
