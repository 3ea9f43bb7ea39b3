//! scaffold::copier
//!
//! Recursive template copy with a fixed exclusion list.
//!
//! # Guarantees
//!
//! The destination mirrors the source structure minus excluded subtrees, at
//! every depth. File contents are copied byte-for-byte; no templating or
//! substitution happens here.
//!
//! # Symlinks
//!
//! Symlinks are dereferenced: entries are stat'd with [`fs::metadata`] (which
//! follows links), so a symlinked directory is recursed into and a symlinked
//! file is copied as the referent's bytes. A dangling link surfaces as an IO
//! error through the normal error path.

use std::ffi::OsStr;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Entry names never copied, matched by exact base name at every level.
pub const EXCLUDED_NAMES: [&str; 5] = ["node_modules", ".git", "dist", "build", ".DS_Store"];

/// Whether an entry name is on the exclusion list.
fn is_excluded(name: &OsStr) -> bool {
    name.to_str().is_some_and(|n| EXCLUDED_NAMES.contains(&n))
}

/// Recursively copy `src` into `dest`, skipping excluded names.
///
/// `dest` must already exist. Files already present at the destination are
/// overwritten. Sibling ordering is whatever `read_dir` yields; copying is
/// not order-sensitive.
pub fn copy_tree(src: &Path, dest: &Path) -> Result<()> {
    let entries = fs::read_dir(src)
        .with_context(|| format!("Failed to read template directory {}", src.display()))?;

    for entry in entries {
        let entry = entry
            .with_context(|| format!("Failed to read entry in {}", src.display()))?;
        let file_name = entry.file_name();
        if is_excluded(&file_name) {
            continue;
        }

        let src_path = entry.path();
        let dest_path = dest.join(&file_name);

        // fs::metadata follows symlinks (dereference policy).
        let metadata = fs::metadata(&src_path)
            .with_context(|| format!("Failed to stat {}", src_path.display()))?;

        if metadata.is_dir() {
            fs::create_dir_all(&dest_path)
                .with_context(|| format!("Failed to create directory {}", dest_path.display()))?;
            copy_tree(&src_path, &dest_path)?;
        } else {
            fs::copy(&src_path, &dest_path).with_context(|| {
                format!(
                    "Failed to copy {} to {}",
                    src_path.display(),
                    dest_path.display()
                )
            })?;
        }
    }

    Ok(())
}
