//! Skill directories: scaffolding and archive packaging.
//!
//! A skill is a directory holding a `SKILL.md` manifest plus arbitrary
//! supporting files, distributed as a `.skill` zip archive with the
//! manifest at the archive root.

pub mod package;
pub mod scaffold;

pub use package::{PackageSummary, package_skill};
pub use scaffold::{ScaffoldOutcome, init_skill};

/// Required manifest file at the root of every skill directory.
pub const MANIFEST_FILE: &str = "SKILL.md";
