//! Workspace backups.
//!
//! One snapshot directory per update run, named by a second-resolution
//! timestamp under `.sprout/backups/`. A snapshot is a verbatim copy of
//! every top-level markdown document; it is a manual recovery path, not a
//! transactional checkpoint.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use tracing::{debug, info};

use crate::meta::META_DIR;

/// Subdirectory of [`META_DIR`] holding snapshots.
pub const BACKUPS_DIR: &str = "backups";

/// Returns `true` when the workspace holds at least one markdown document.
pub fn has_documents(workspace: &Path) -> bool {
    !workspace_documents(workspace).is_empty()
}

/// Top-level markdown documents in the workspace, sorted by name.
pub fn workspace_documents(workspace: &Path) -> Vec<PathBuf> {
    let Ok(entries) = fs::read_dir(workspace) else {
        return Vec::new();
    };

    let mut docs: Vec<PathBuf> = entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && path.extension().map_or(false, |e| e == "md"))
        .collect();
    docs.sort();
    docs
}

/// Snapshot every document in the workspace into a fresh timestamped
/// directory and return its path.
///
/// Copying zero files is not an error; the directory is created regardless.
pub fn create_backup(workspace: &Path) -> std::io::Result<PathBuf> {
    let timestamp = Local::now().format("%Y-%m-%dT%H-%M-%S").to_string();
    let backup_dir = workspace.join(META_DIR).join(BACKUPS_DIR).join(timestamp);
    fs::create_dir_all(&backup_dir)?;

    let mut copied = 0usize;
    for doc in workspace_documents(workspace) {
        if let Some(name) = doc.file_name() {
            fs::copy(&doc, backup_dir.join(name))?;
            copied += 1;
        }
    }

    debug!(path = %backup_dir.display(), copied, "backup created");
    if copied > 0 {
        info!("backed up {copied} documents to {}", backup_dir.display());
    }
    Ok(backup_dir)
}
