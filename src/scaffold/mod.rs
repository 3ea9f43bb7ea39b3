//! scaffold
//!
//! Filesystem mutations that produce a new project.
//!
//! # Modules
//!
//! - [`copier`] - Recursive template copy with exclusions
//! - [`manifest`] - `package.json` name patching
//!
//! # Design
//!
//! All mutations flow through [`create_project`], which is the single place
//! that knows the step ordering and the cleanup rule: the target subtree is
//! fully populated before the manifest patch begins, and any failure after
//! the target directory was created removes the whole subtree again
//! (best-effort). Nothing below this boundary recovers locally.

pub mod copier;
pub mod manifest;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use thiserror::Error;

use crate::core::types::ProjectName;

/// Errors from the scaffold sequence with dedicated handling upstream.
///
/// Plain IO failures during copy or patch travel as `anyhow` errors with
/// path context; these variants exist where the caller's behavior differs
/// (a collision performs no cleanup, a missing template names the lookup
/// that failed).
#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error("directory {} already exists", .path.display())]
    Collision { path: PathBuf },

    #[error("template directory not found at {}", .path.display())]
    TemplateMissing { path: PathBuf },
}

/// Guard that `target` does not already exist.
///
/// The orchestrator runs this before anything is created, so a collision
/// never triggers cleanup. The check is non-atomic with the later directory
/// creation; the race window is an accepted limitation.
pub fn ensure_target_available(target: &Path) -> Result<(), ScaffoldError> {
    if target.exists() {
        return Err(ScaffoldError::Collision {
            path: target.to_path_buf(),
        });
    }
    Ok(())
}

/// Create a new project at `target` from the template at `template_root`.
///
/// Steps: directory creation, recursive copy, manifest patch. Any failure
/// removes `target` recursively (best-effort) before the error propagates.
/// Callers guard against an existing target with
/// [`ensure_target_available`] first.
pub fn create_project(
    template_root: &Path,
    target: &Path,
    name: &ProjectName,
) -> Result<()> {
    let result = populate(template_root, target, name);
    if result.is_err() && target.exists() {
        // Best-effort cleanup; a failure here is not separately reported.
        let _ = fs::remove_dir_all(target);
    }
    result
}

fn populate(template_root: &Path, target: &Path, name: &ProjectName) -> Result<()> {
    if !template_root.is_dir() {
        return Err(ScaffoldError::TemplateMissing {
            path: template_root.to_path_buf(),
        }
        .into());
    }

    fs::create_dir_all(target)
        .with_context(|| format!("Failed to create directory {}", target.display()))?;

    copier::copy_tree(template_root, target)?;

    manifest::patch_name(target, name)
        .with_context(|| format!("Failed to update manifest in {}", target.display()))?;

    Ok(())
}
