//! Error handling for wpdocs.
//!
//! A single [`WpDocsError`] enum covers every failure surface: argument
//! validation, the documentation API, and the skill filesystem operations.
//! All of them reach the user as a message on stderr plus a non-zero exit.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Main error type for wpdocs operations.
#[derive(Error, Debug)]
pub enum WpDocsError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    /// Bad enumeration value, non-positive id, malformed skill name.
    /// Detected before any I/O.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The API returned 404 for a document lookup. The message is fixed
    /// so callers can tell it apart from generic HTTP failures.
    #[error("Document not found")]
    DocumentNotFound,

    #[error("HTTP error {0}")]
    Http(u16),

    #[error("Network error: {0}")]
    Network(String),

    /// The response payload itself encodes a failure; carries the
    /// server-supplied message verbatim.
    #[error("{0}")]
    Api(String),

    #[error("Config error: {0}")]
    Config(String),

    /// Filesystem precondition failure: missing directory, missing
    /// manifest, existing scaffold target.
    #[error("Validation failed: {0}")]
    ValidationFailed(String),

    /// The resolved archive destination would land inside the directory
    /// being archived, which would make the archive include itself.
    #[error("unsafe destination: {} is inside the skill directory {}", .dest.display(), .skill_dir.display())]
    UnsafeDestination { skill_dir: PathBuf, dest: PathBuf },
}

pub type Result<T> = std::result::Result<T, WpDocsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_is_distinct_from_http_errors() {
        let not_found = WpDocsError::DocumentNotFound.to_string();
        let http = WpDocsError::Http(500).to_string();
        assert_eq!(not_found, "Document not found");
        assert_eq!(http, "HTTP error 500");
        assert_ne!(not_found, http);
    }

    #[test]
    fn unsafe_destination_names_both_paths() {
        let err = WpDocsError::UnsafeDestination {
            skill_dir: PathBuf::from("/skills/demo"),
            dest: PathBuf::from("/skills/demo/out.skill"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/skills/demo"));
        assert!(msg.contains("/skills/demo/out.skill"));
    }
}
