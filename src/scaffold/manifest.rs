//! scaffold::manifest
//!
//! Patch the scaffolded project's `package.json`.
//!
//! The manifest is treated as an open-ended key-value document: it is parsed
//! into a [`serde_json::Value`], exactly one top-level field (`name`) is
//! overwritten (or inserted), and the document is written back with 2-space
//! indentation and a trailing newline. serde_json is built with
//! `preserve_order`, so every other field keeps its original position.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;

use crate::core::types::ProjectName;

/// File name of the project manifest inside the scaffolded tree.
pub const MANIFEST_FILE: &str = "package.json";

/// Errors from manifest patching.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("manifest not found at {}", .path.display())]
    Missing { path: PathBuf },

    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{} is not valid JSON: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{} does not contain a JSON object", .path.display())]
    NotAnObject { path: PathBuf },

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Set the manifest's top-level `name` field to the project name.
///
/// Reads `<project_dir>/package.json`, overwrites (or inserts) `name`, and
/// rewrites the file with 2-space indentation. All other fields are
/// preserved in value and order.
pub fn patch_name(project_dir: &Path, name: &ProjectName) -> Result<(), ManifestError> {
    let path = project_dir.join(MANIFEST_FILE);

    if !path.is_file() {
        return Err(ManifestError::Missing { path });
    }

    let raw = fs::read_to_string(&path).map_err(|source| ManifestError::Read {
        path: path.clone(),
        source,
    })?;

    let mut doc: Value = serde_json::from_str(&raw).map_err(|source| ManifestError::Parse {
        path: path.clone(),
        source,
    })?;

    let fields = doc
        .as_object_mut()
        .ok_or_else(|| ManifestError::NotAnObject { path: path.clone() })?;
    fields.insert("name".to_string(), Value::String(name.as_str().to_string()));

    let mut serialized =
        serde_json::to_string_pretty(&doc).map_err(|source| ManifestError::Parse {
            path: path.clone(),
            source,
        })?;
    serialized.push('\n');

    fs::write(&path, serialized).map_err(|source| ManifestError::Write { path, source })
}
