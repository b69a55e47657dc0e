//! Plain-text rendering for code reference excerpts.

use std::sync::LazyLock;

use regex::Regex;

use super::unescape_entities;

static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").unwrap());
static BLANK_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{3,}").unwrap());

/// Strip tags, decode entities, and collapse surplus blank lines.
#[must_use]
pub fn html_to_text(html: &str) -> String {
    let text = TAG.replace_all(html, "");
    let text = unescape_entities(&text);
    let text = BLANK_RUN.replace_all(&text, "\n\n");
    text.trim().to_string()
}
