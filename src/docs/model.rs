//! Records returned to callers and the wire shapes they come from.

use serde::{Deserialize, Serialize};

/// One search result, in the order the server returned it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchHit {
    pub id: u64,
    pub title: String,
    pub url: String,
    pub subtype: String,
}

/// A handbook page with its body converted to Markdown.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct HandbookDoc {
    pub id: u64,
    pub title: String,
    pub url: String,
    pub content: String,
}

/// A code reference entry with its excerpt converted to plain text.
///
/// `since` and `source_file` are omitted by the API for some entries and
/// serialize as `null` rather than erroring.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ReferenceDoc {
    pub id: u64,
    pub title: String,
    pub url: String,
    pub excerpt: String,
    pub since: Option<String>,
    pub source_file: Option<String>,
}

/// The `{"rendered": "..."}` wrapper used by content endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct Rendered {
    pub rendered: String,
}

/// Wire shape of `/{subtype}/{id}` for handbooks.
#[derive(Debug, Deserialize)]
pub struct HandbookPayload {
    pub id: u64,
    pub title: Rendered,
    pub content: Rendered,
    pub link: String,
}

/// Wire shape of `/{subtype}/{id}` for the code reference.
#[derive(Debug, Deserialize)]
pub struct ReferencePayload {
    pub id: u64,
    pub title: Rendered,
    pub excerpt: Rendered,
    pub link: String,
    #[serde(rename = "wp-parser-since", default)]
    pub since: Vec<String>,
    #[serde(rename = "wp-parser-source-file", default)]
    pub source_file: Vec<String>,
}
