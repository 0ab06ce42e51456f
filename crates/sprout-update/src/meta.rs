//! Persisted workspace metadata.
//!
//! One JSON file per workspace at `.sprout/meta.json`, recording which seed
//! version is installed. Absent or malformed metadata is a valid state
//! meaning "uninitialized or externally created" — reads degrade to `None`
//! rather than failing.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::UpdateResult;

/// Directory under the workspace holding metadata and backups.
pub const META_DIR: &str = ".sprout";

/// Metadata file name inside [`META_DIR`].
pub const META_FILE: &str = "meta.json";

/// The tool version written into metadata.
pub const TOOL_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Persisted record of what is installed in a workspace.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WorkspaceMeta {
    pub seed_id: String,
    pub seed_name: String,
    /// Seed file reference used for later updates; older metadata may lack it.
    #[serde(default)]
    pub seed_file: Option<String>,
    /// Accepted as a number or a numeric string on read, written as a number.
    #[serde(deserialize_with = "sprout_types::lenient::lenient_f64")]
    pub installed_version: f64,
    pub installed_at: String,
    pub tool_version: String,
}

/// Path of the metadata file for a workspace.
pub fn meta_path(workspace: &Path) -> PathBuf {
    workspace.join(META_DIR).join(META_FILE)
}

/// Read workspace metadata.
///
/// Returns `None` when the file is missing, unreadable, malformed, or lacks
/// required fields — all mean "no metadata", never an error.
pub fn read_meta(workspace: &Path) -> Option<WorkspaceMeta> {
    let path = meta_path(workspace);
    let text = fs::read_to_string(&path).ok()?;

    match serde_json::from_str(&text) {
        Ok(meta) => Some(meta),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "ignoring malformed workspace metadata");
            None
        }
    }
}

/// Write workspace metadata, creating `.sprout/` as needed.
pub fn write_meta(workspace: &Path, meta: &WorkspaceMeta) -> UpdateResult<()> {
    let dir = workspace.join(META_DIR);
    fs::create_dir_all(&dir)?;

    let text = serde_json::to_string_pretty(meta)?;
    fs::write(dir.join(META_FILE), text)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn sample_meta() -> WorkspaceMeta {
        WorkspaceMeta {
            seed_id: "test_001".into(),
            seed_name: "Test Soul".into(),
            seed_file: Some("test_seed".into()),
            installed_version: 1.0,
            installed_at: "2024-01-15T10:30:00".into(),
            tool_version: "0.2.0".into(),
        }
    }

    #[test]
    fn roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let meta = sample_meta();
        write_meta(dir.path(), &meta).unwrap();
        assert_eq!(read_meta(dir.path()).unwrap(), meta);
    }

    #[test]
    fn version_written_as_number() {
        let dir = tempfile::tempdir().unwrap();
        write_meta(dir.path(), &sample_meta()).unwrap();
        let text = fs::read_to_string(meta_path(dir.path())).unwrap();
        assert!(text.contains("\"installed_version\": 1.0"));
    }

    #[test]
    fn version_as_string_accepted_on_read() {
        let dir = tempfile::tempdir().unwrap();
        let meta_dir = dir.path().join(META_DIR);
        fs::create_dir_all(&meta_dir).unwrap();
        let mut f = fs::File::create(meta_dir.join(META_FILE)).unwrap();
        f.write_all(
            br#"{
                "seed_id": "x",
                "seed_name": "X",
                "seed_file": "x",
                "installed_version": "2.5",
                "installed_at": "2024-02-01",
                "tool_version": "0.3.0"
            }"#,
        )
        .unwrap();

        let meta = read_meta(dir.path()).unwrap();
        assert_eq!(meta.installed_version, 2.5);
    }

    #[test]
    fn missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        assert!(read_meta(dir.path()).is_none());
    }

    #[test]
    fn malformed_json_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let meta_dir = dir.path().join(META_DIR);
        fs::create_dir_all(&meta_dir).unwrap();
        fs::write(meta_dir.join(META_FILE), "{not json").unwrap();
        assert!(read_meta(dir.path()).is_none());
    }

    #[test]
    fn missing_required_field_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let meta_dir = dir.path().join(META_DIR);
        fs::create_dir_all(&meta_dir).unwrap();
        fs::write(meta_dir.join(META_FILE), r#"{"seed_id": "only"}"#).unwrap();
        assert!(read_meta(dir.path()).is_none());
    }

    #[test]
    fn missing_seed_file_defaults_to_none() {
        let dir = tempfile::tempdir().unwrap();
        let meta_dir = dir.path().join(META_DIR);
        fs::create_dir_all(&meta_dir).unwrap();
        fs::write(
            meta_dir.join(META_FILE),
            r#"{
                "seed_id": "x",
                "seed_name": "X",
                "installed_version": 1.0,
                "installed_at": "2024-02-01",
                "tool_version": "0.3.0"
            }"#,
        )
        .unwrap();

        let meta = read_meta(dir.path()).unwrap();
        assert!(meta.seed_file.is_none());
    }
}
