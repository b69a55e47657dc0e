//! Skill scaffolding from a fixed manifest template.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, WpDocsError};
use crate::skill::MANIFEST_FILE;

/// Default description when the caller does not supply one.
pub const DEFAULT_DESCRIPTION: &str = "A new skill for WordPress development assistance.";

const SKILL_TEMPLATE: &str = r#"---
name: {name}
description: >
  {description}
  Requires the wpdocs CLI.
license: Apache-2.0
metadata:
  author: your-name
  version: "0.1.0"
---

# {title} Skill

Brief description of what this skill does.

## Prerequisites

The `wpdocs` CLI must be installed and on PATH.

## Available Commands

- **wpdocs handbook search / get**: WordPress handbook documentation
- **wpdocs reference search / get**: WordPress code reference

## Usage Instructions

### Step 1: Search

Describe how to search...

### Step 2: Retrieve Content

Describe how to get content...

## Examples

Add example queries and expected behavior...
"#;

/// Paths produced by a successful scaffold.
#[derive(Debug, Clone)]
pub struct ScaffoldOutcome {
    pub skill_dir: PathBuf,
    pub manifest_path: PathBuf,
}

/// Create `<base>/skills/<name>` with a templated manifest.
///
/// Refuses to touch an existing directory.
pub fn init_skill(name: &str, description: &str, base_dir: &Path) -> Result<ScaffoldOutcome> {
    validate_name(name)?;

    let skill_dir = base_dir.join("skills").join(name);
    if skill_dir.exists() {
        return Err(WpDocsError::ValidationFailed(format!(
            "skill directory already exists: {}",
            skill_dir.display()
        )));
    }

    fs::create_dir_all(&skill_dir)?;

    let manifest_path = skill_dir.join(MANIFEST_FILE);
    let content = SKILL_TEMPLATE
        .replace("{name}", name)
        .replace("{title}", &title_case(name))
        .replace("{description}", description);
    fs::write(&manifest_path, content)?;

    tracing::info!(skill = name, path = %skill_dir.display(), "scaffolded skill");

    Ok(ScaffoldOutcome {
        skill_dir,
        manifest_path,
    })
}

/// Names are kebab-case: letters, digits, and hyphens, with at least one
/// alphanumeric character.
fn validate_name(name: &str) -> Result<()> {
    let stripped: String = name.chars().filter(|c| *c != '-').collect();
    if stripped.is_empty() || !stripped.chars().all(char::is_alphanumeric) {
        return Err(WpDocsError::InvalidInput(
            "skill name should only contain letters, numbers, and hyphens".to_string(),
        ));
    }
    Ok(())
}

/// Convert a kebab-case name to Title Case.
#[must_use]
pub fn title_case(name: &str) -> String {
    name.split('-')
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().collect::<String>() + chars.as_str(),
    }
}
