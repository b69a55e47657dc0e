//! Structural HTML to Markdown conversion for handbook pages.

use std::sync::LazyLock;

use regex::Regex;

use super::unescape_entities;

/// Conversion rules applied in order. Each tuple is (pattern, replacement)
/// where `${N}` refers to capture groups. Block-level rules that span
/// lines use `(?s)`; inline rules stay single-line like the markup the
/// API emits.
static RULES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    vec![
        // Scripts and styles carry no prose
        (Regex::new(r"(?is)<script[^>]*>.*?</script>").unwrap(), ""),
        (Regex::new(r"(?is)<style[^>]*>.*?</style>").unwrap(), ""),
        // Headings
        (Regex::new(r"(?i)<h1[^>]*>(.*?)</h1>").unwrap(), "# ${1}\n\n"),
        (Regex::new(r"(?i)<h2[^>]*>(.*?)</h2>").unwrap(), "## ${1}\n\n"),
        (Regex::new(r"(?i)<h3[^>]*>(.*?)</h3>").unwrap(), "### ${1}\n\n"),
        (Regex::new(r"(?i)<h4[^>]*>(.*?)</h4>").unwrap(), "#### ${1}\n\n"),
        (Regex::new(r"(?i)<h5[^>]*>(.*?)</h5>").unwrap(), "##### ${1}\n\n"),
        (Regex::new(r"(?i)<h6[^>]*>(.*?)</h6>").unwrap(), "###### ${1}\n\n"),
        // Code blocks before inline code so <pre><code> wins
        (
            Regex::new(r"(?is)<pre[^>]*><code[^>]*>(.*?)</code></pre>").unwrap(),
            "```\n${1}\n```\n\n",
        ),
        (
            Regex::new(r"(?is)<pre[^>]*>(.*?)</pre>").unwrap(),
            "```\n${1}\n```\n\n",
        ),
        (Regex::new(r"(?i)<code[^>]*>(.*?)</code>").unwrap(), "`${1}`"),
        // Links
        (
            Regex::new(r#"(?i)<a[^>]*href="([^"]*)"[^>]*>(.*?)</a>"#).unwrap(),
            "[${2}](${1})",
        ),
        // Bold and italic
        (
            Regex::new(r"(?i)<strong[^>]*>(.*?)</strong>").unwrap(),
            "**${1}**",
        ),
        (Regex::new(r"(?i)<b[^>]*>(.*?)</b>").unwrap(), "**${1}**"),
        (Regex::new(r"(?i)<em[^>]*>(.*?)</em>").unwrap(), "*${1}*"),
        (Regex::new(r"(?i)<i[^>]*>(.*?)</i>").unwrap(), "*${1}*"),
        // Lists
        (Regex::new(r"(?i)<ul[^>]*>").unwrap(), "\n"),
        (Regex::new(r"(?i)</ul>").unwrap(), "\n"),
        (Regex::new(r"(?i)<ol[^>]*>").unwrap(), "\n"),
        (Regex::new(r"(?i)</ol>").unwrap(), "\n"),
        (Regex::new(r"(?is)<li[^>]*>(.*?)</li>").unwrap(), "- ${1}\n"),
        // Paragraphs and line breaks
        (Regex::new(r"(?is)<p[^>]*>(.*?)</p>").unwrap(), "${1}\n\n"),
        (Regex::new(r"(?i)<br\s*/?>").unwrap(), "\n"),
        (Regex::new(r"(?i)<hr\s*/?>").unwrap(), "\n---\n\n"),
        // Blockquotes
        (
            Regex::new(r"(?is)<blockquote[^>]*>(.*?)</blockquote>").unwrap(),
            "> ${1}\n\n",
        ),
        // Anything left is markup we do not map
        (Regex::new(r"<[^>]+>").unwrap(), ""),
    ]
});

static BLANK_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{3,}").unwrap());

/// Convert rendered handbook HTML to Markdown.
#[must_use]
pub fn html_to_markdown(html: &str) -> String {
    let mut text = html.to_string();
    for (pattern, replacement) in RULES.iter() {
        text = pattern.replace_all(&text, *replacement).into_owned();
    }

    let text = unescape_entities(&text);
    let text = BLANK_RUN.replace_all(&text, "\n\n");
    text.trim().to_string()
}
