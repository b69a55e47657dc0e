//! HTML to text/Markdown conversion.
//!
//! Both converters are ordered substitution pipelines: each rule assumes
//! the previous ones already ran. The approach does not handle nested or
//! malformed markup robustly; rendered excerpts and handbook pages from
//! the API are well-formed enough in practice.

mod markdown;
mod text;

pub use markdown::html_to_markdown;
pub use text::html_to_text;

/// Decode the fixed entity set used by the rendered API fields, in order.
pub(crate) fn unescape_entities(text: &str) -> String {
    text.replace("&nbsp;", " ")
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
}
