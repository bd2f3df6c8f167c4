//! Package naming for project manifests
//!
//! Every project's manifest `name` field must equal the project's path
//! relative to the workshop root, with path separators replaced by a fixed
//! token. Renaming touches only the `name` field; all other fields pass
//! through the re-serialization unmodified.

use serde_json::Value;

use crate::classify::Project;
use crate::{Error, NormalizedPath, Result, io};

/// Manifest file name expected inside each project directory.
pub const MANIFEST_FILE: &str = "package.json";

/// Token substituted for path separators in derived package names.
pub const PACKAGE_NAME_SEPARATOR: &str = "__sep__";

/// Result of one naming pass over a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NameOutcome {
    pub changed: bool,
}

/// Derive the canonical package name for a repository-relative path.
pub fn package_name(relative: &NormalizedPath) -> String {
    relative.as_str().replace('/', PACKAGE_NAME_SEPARATOR)
}

/// Reconcile a project's manifest `name` field with its derived name.
///
/// Reads and parses the manifest, computes the candidate name from the
/// project's path relative to `root`, and rewrites the manifest only when
/// the name differs. The write is skipped when the serialized bytes match
/// what is already on disk, so an unchanged manifest never churns file
/// timestamps or wakes file-watchers.
///
/// Idempotent: a second run over an unchanged project reports
/// `changed = false` and performs no write.
///
/// # Errors
///
/// Returns `Error::ManifestParse` if the manifest is not a valid JSON
/// object. This aborts the whole run: a corrupt manifest is a broken
/// repository state the maintainer must fix.
pub fn apply_name(root: &NormalizedPath, project: &Project) -> Result<NameOutcome> {
    reconcile_name(root, project, true)
}

/// Dry-run form of [`apply_name`]: reports whether the manifest would
/// change without writing anything.
pub fn preview_name(root: &NormalizedPath, project: &Project) -> Result<NameOutcome> {
    reconcile_name(root, project, false)
}

fn reconcile_name(root: &NormalizedPath, project: &Project, write: bool) -> Result<NameOutcome> {
    let manifest_path = project.manifest_path();
    let current_bytes = io::read_bytes(&manifest_path)?;

    let mut document: Value =
        serde_json::from_slice(&current_bytes).map_err(|e| Error::ManifestParse {
            path: manifest_path.to_native(),
            message: e.to_string(),
        })?;
    let fields = document.as_object_mut().ok_or_else(|| Error::ManifestParse {
        path: manifest_path.to_native(),
        message: "manifest root is not a JSON object".to_string(),
    })?;

    let relative = project
        .path
        .relative_to(root)
        .ok_or_else(|| Error::ProjectOutsideRoot {
            path: project.path.to_native(),
            root: root.to_native(),
        })?;
    let candidate = package_name(&relative);

    if fields.get("name").and_then(Value::as_str) == Some(candidate.as_str()) {
        return Ok(NameOutcome { changed: false });
    }

    if write {
        fields.insert("name".to_string(), Value::String(candidate));
        let mut serialized =
            serde_json::to_string_pretty(&document).map_err(|e| Error::ManifestSerialize {
                path: manifest_path.to_native(),
                message: e.to_string(),
            })?;
        serialized.push('\n');

        if serialized.as_bytes() != current_bytes.as_slice() {
            io::write_atomic(&manifest_path, serialized.as_bytes())?;
        }

        tracing::info!(manifest = %manifest_path, "Updated package name");
    }
    Ok(NameOutcome { changed: true })
}
