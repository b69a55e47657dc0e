//! Documentation domains and their subtype enumerations.

use std::fmt;

use crate::error::{Result, WpDocsError};

/// Handbook collections indexed by the search endpoint.
pub const HANDBOOK_SUBTYPES: &[&str] = &[
    "plugin-handbook",
    "theme-handbook",
    "blocks-handbook",
    "rest-api-handbook",
    "apis-handbook",
    "wpcs-handbook",
    "adv-admin-handbook",
];

/// Code reference post types produced by wp-parser.
pub const CODE_REF_SUBTYPES: &[&str] = &[
    "wp-parser-function",
    "wp-parser-hook",
    "wp-parser-class",
    "wp-parser-method",
];

/// A documentation collection on developer.wordpress.org.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocDomain {
    Handbook,
    CodeReference,
}

impl DocDomain {
    /// The closed set of subtypes valid for this domain.
    #[must_use]
    pub const fn subtypes(self) -> &'static [&'static str] {
        match self {
            Self::Handbook => HANDBOOK_SUBTYPES,
            Self::CodeReference => CODE_REF_SUBTYPES,
        }
    }

    /// Validate caller-supplied subtype filters against the enumeration.
    ///
    /// Any value outside the set fails with an error naming the offending
    /// values and the valid set. Validation happens before any I/O.
    pub fn validate_subtypes(self, requested: &[String]) -> Result<()> {
        let invalid: Vec<&str> = requested
            .iter()
            .map(String::as_str)
            .filter(|s| !self.subtypes().contains(s))
            .collect();

        if invalid.is_empty() {
            Ok(())
        } else {
            Err(WpDocsError::InvalidInput(format!(
                "Invalid subtypes: {}. Valid: {}",
                invalid.join(", "),
                self.subtypes().join(", ")
            )))
        }
    }

    /// Validate a single subtype used for a content lookup.
    pub fn validate_subtype(self, subtype: &str) -> Result<()> {
        if self.subtypes().contains(&subtype) {
            Ok(())
        } else {
            Err(WpDocsError::InvalidInput(format!(
                "Invalid subtype: {subtype}. Valid: {}",
                self.subtypes().join(", ")
            )))
        }
    }
}

impl fmt::Display for DocDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Handbook => write!(f, "handbook"),
            Self::CodeReference => write!(f, "code reference"),
        }
    }
}

/// Split a comma-separated subtype list into trimmed values.
#[must_use]
pub fn parse_subtype_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
        .collect()
}
