pub mod app;
pub mod cli;
pub mod config;
pub mod docs;
pub mod error;
pub mod html;
pub mod skill;

pub use error::{Result, WpDocsError};

/// Package version from Cargo.toml.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
