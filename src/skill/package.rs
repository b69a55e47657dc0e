//! Skill packaging into a `.skill` zip archive.
//!
//! The archive-construction contract:
//! - the source must exist and contain `SKILL.md`
//! - the destination must not resolve to a location inside the source
//!   (the archive would include itself), checked on canonical paths
//!   before anything is created
//! - the manifest is the first entry, at the archive root
//! - every other regular file is stored under its forward-slash relative
//!   path, in sorted walk order, skipping excluded path components and
//!   the destination file itself

use std::fs::{self, File};
use std::io;
use std::path::{Component, Path, PathBuf};

use walkdir::WalkDir;
use zip::CompressionMethod;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use crate::error::{Result, WpDocsError};
use crate::skill::MANIFEST_FILE;

/// What a packaging run produced.
#[derive(Debug, Clone)]
pub struct PackageSummary {
    pub skill_dir: PathBuf,
    pub output: PathBuf,
    /// Archive entry names, manifest first.
    pub entries: Vec<String>,
}

/// Package `skill_dir` into a zip archive at `output`.
pub fn package_skill(skill_dir: &Path, output: &Path, exclude: &[String]) -> Result<PackageSummary> {
    if !skill_dir.is_dir() {
        return Err(WpDocsError::ValidationFailed(format!(
            "skill directory not found: {}",
            skill_dir.display()
        )));
    }
    let manifest = skill_dir.join(MANIFEST_FILE);
    if !manifest.is_file() {
        return Err(WpDocsError::ValidationFailed(format!(
            "{MANIFEST_FILE} not found in {}",
            skill_dir.display()
        )));
    }

    let resolved_src = skill_dir.canonicalize()?;
    let resolved_dest = resolve_destination(output)?;
    if resolved_dest.starts_with(&resolved_src) {
        return Err(WpDocsError::UnsafeDestination {
            skill_dir: resolved_src,
            dest: resolved_dest,
        });
    }

    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut zip = ZipWriter::new(File::create(output)?);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    let mut entries = Vec::new();

    // The manifest goes first, at the archive root, addressed by its
    // known relative name rather than its walk position.
    append_file(&mut zip, &manifest, MANIFEST_FILE, options)?;
    entries.push(MANIFEST_FILE.to_string());

    let manifest_canonical = manifest.canonicalize()?;
    // The destination exists now; compare against its exact canonical form.
    let dest_canonical = output.canonicalize()?;

    let walker = WalkDir::new(skill_dir)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_excluded(entry.file_name(), exclude));

    for entry in walker {
        let entry = entry.map_err(|err| {
            WpDocsError::ValidationFailed(format!("walk {}: {err}", skill_dir.display()))
        })?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let canonical = path.canonicalize()?;
        // Never archive the archive being written, and never store the
        // manifest a second time.
        if canonical == dest_canonical || canonical == manifest_canonical {
            continue;
        }

        let relative = path.strip_prefix(skill_dir).map_err(|_| {
            WpDocsError::ValidationFailed(format!(
                "file {} escapes skill directory {}",
                path.display(),
                skill_dir.display()
            ))
        })?;
        let name = archive_entry_name(relative);
        append_file(&mut zip, path, &name, options)?;
        entries.push(name);
    }

    zip.finish()?;
    tracing::info!(
        output = %output.display(),
        entries = entries.len(),
        "packaged skill"
    );

    Ok(PackageSummary {
        skill_dir: resolved_src,
        output: output.to_path_buf(),
        entries,
    })
}

fn append_file(
    zip: &mut ZipWriter<File>,
    path: &Path,
    name: &str,
    options: SimpleFileOptions,
) -> Result<()> {
    zip.start_file(name, options)?;
    let mut file = File::open(path)?;
    io::copy(&mut file, zip)?;
    Ok(())
}

fn is_excluded(file_name: &std::ffi::OsStr, exclude: &[String]) -> bool {
    file_name
        .to_str()
        .is_some_and(|name| exclude.iter().any(|excluded| excluded == name))
}

/// Archive entry names use forward slashes regardless of host conventions.
fn archive_entry_name(relative: &Path) -> String {
    relative
        .components()
        .map(|component| component.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// Resolve the destination to canonical absolute form even though the
/// file may not exist yet: canonicalize the deepest existing ancestor
/// (seeing through symlinks) and re-append the remainder.
fn resolve_destination(output: &Path) -> Result<PathBuf> {
    let absolute = lexical_absolute(output)?;

    let mut existing = absolute.as_path();
    let mut remainder = Vec::new();
    while !existing.exists() {
        match (existing.parent(), existing.file_name()) {
            (Some(parent), Some(name)) => {
                remainder.push(name.to_os_string());
                existing = parent;
            }
            _ => return Ok(absolute.clone()),
        }
    }

    let mut resolved = existing.canonicalize()?;
    for name in remainder.iter().rev() {
        resolved.push(name);
    }
    Ok(resolved)
}

/// Absolutize and normalize `.`/`..` components without touching the
/// filesystem.
fn lexical_absolute(path: &Path) -> Result<PathBuf> {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()?.join(path)
    };

    let mut normalized = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other),
        }
    }
    Ok(normalized)
}
