//! Seed catalog: resolution and listing.

use std::fs;
use std::path::{Path, PathBuf};

use serde_yaml::Value;
use tracing::debug;

use crate::error::{SeedError, SeedResult};

/// Basic information about one catalog entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeedInfo {
    /// File stem, usable with [`resolve_seed_path`].
    pub name: String,
    pub path: PathBuf,
    /// `meta.name` from the file, or the stem when unreadable.
    pub display_name: String,
}

/// The seeds directory: `$SPROUT_SEEDS_DIR` when set, else `./seeds`.
pub fn default_seeds_dir() -> PathBuf {
    std::env::var_os("SPROUT_SEEDS_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("seeds"))
}

/// Resolve a seed name or path to a file path.
///
/// Accepts a direct path to an existing file, or a bare name like
/// `tabula_rasa` looked up in `seeds_dir` with `.yaml` then `.yml`
/// extensions.
pub fn resolve_seed_path(seed_name: &str, seeds_dir: &Path) -> SeedResult<PathBuf> {
    let candidate = Path::new(seed_name);
    if candidate.is_file() {
        return Ok(candidate.to_path_buf());
    }

    for ext in ["yaml", "yml"] {
        let path = seeds_dir.join(format!("{seed_name}.{ext}"));
        if path.is_file() {
            debug!(seed = seed_name, path = %path.display(), "resolved seed");
            return Ok(path);
        }
    }

    Err(SeedError::NotFound(seed_name.to_string()))
}

/// List all seed files in `seeds_dir`, sorted by name.
///
/// A missing directory yields an empty list. Entries whose YAML cannot be
/// read fall back to the file stem as display name.
pub fn list_seeds(seeds_dir: &Path) -> Vec<SeedInfo> {
    let Ok(entries) = fs::read_dir(seeds_dir) else {
        return Vec::new();
    };

    let mut results: Vec<SeedInfo> = entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| {
            path.extension()
                .and_then(|e| e.to_str())
                .map_or(false, |e| e == "yaml" || e == "yml")
        })
        .map(|path| {
            let name = path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or_default()
                .to_string();
            let display_name = read_display_name(&path).unwrap_or_else(|| name.clone());
            SeedInfo {
                name,
                path,
                display_name,
            }
        })
        .collect();

    results.sort_by(|a, b| a.name.cmp(&b.name));
    results
}

fn read_display_name(path: &Path) -> Option<String> {
    let text = fs::read_to_string(path).ok()?;
    let value: Value = serde_yaml::from_str(&text).ok()?;
    value
        .get("meta")
        .and_then(|m| m.get("name"))
        .and_then(Value::as_str)
        .map(str::to_string)
}
