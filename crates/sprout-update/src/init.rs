//! Workspace initialization.
//!
//! First-time generation: load a seed, render every document, write them
//! out, and record the installed version in `.sprout/meta.json` so later
//! updates know what is installed.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use tracing::info;

use sprout_render::generate_workspace;
use sprout_seed::{load_seed, resolve_seed_path};

use crate::error::UpdateResult;
use crate::meta::{write_meta, WorkspaceMeta, TOOL_VERSION};
use crate::update::write_document;

/// Write rendered documents into `output_dir`, skipping empty content.
///
/// Returns the paths written, in generation order.
pub fn write_workspace(
    documents: &[(String, String)],
    output_dir: &Path,
) -> UpdateResult<Vec<PathBuf>> {
    fs::create_dir_all(output_dir)?;

    let mut written = Vec::new();
    for (filename, content) in documents {
        if content.trim().is_empty() {
            continue;
        }
        let path = output_dir.join(filename);
        write_document(&path, content)?;
        written.push(path);
    }
    Ok(written)
}

/// Generate a fresh workspace from a seed and record its metadata.
pub fn init_workspace(
    seed_name: &str,
    output_dir: &Path,
    seeds_dir: &Path,
) -> UpdateResult<Vec<PathBuf>> {
    let path = resolve_seed_path(seed_name, seeds_dir)?;
    let seed = load_seed(&path)?;

    let documents = generate_workspace(&seed);
    let written = write_workspace(&documents, output_dir)?;

    write_meta(
        output_dir,
        &WorkspaceMeta {
            seed_id: seed.meta.seed_id.clone(),
            seed_name: seed.meta.name.clone(),
            seed_file: Some(seed_name.to_string()),
            installed_version: seed.meta.version,
            installed_at: Local::now().format("%Y-%m-%dT%H:%M:%S").to_string(),
            tool_version: TOOL_VERSION.to_string(),
        },
    )?;

    info!(
        seed = %seed.meta.name,
        version = seed.meta.version,
        files = written.len(),
        "workspace initialized"
    );
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::meta::read_meta;

    const SEED: &str = r#"
meta:
  seed_id: init_001
  name: Init Soul
  version: 1.0
  created_at: "2024-01-01"
nucleus:
  drives:
    curiosity: 0.8
  prime_directives: [Be honest.]
persona:
  current_mission: Explore.
  memory_summary: Fresh.
  unlocked_skills: []
pulse:
  tone: [warm]
  formatting_preference: markdown
"#;

    #[test]
    fn init_writes_documents_and_metadata() {
        let root = tempfile::tempdir().unwrap();
        let seeds_dir = root.path().join("seeds");
        let workspace = root.path().join("workspace");
        fs::create_dir_all(&seeds_dir).unwrap();
        fs::write(seeds_dir.join("blank.yaml"), SEED).unwrap();

        let written = init_workspace("blank", &workspace, &seeds_dir).unwrap();
        assert!(!written.is_empty());
        assert!(workspace.join("IDENTITY.md").is_file());
        assert!(workspace.join("SOUL.md").is_file());
        // No backstory in the seed, so STORY.md is skipped.
        assert!(!workspace.join("STORY.md").exists());

        let meta = read_meta(&workspace).unwrap();
        assert_eq!(meta.seed_id, "init_001");
        assert_eq!(meta.seed_file.as_deref(), Some("blank"));
        assert_eq!(meta.installed_version, 1.0);
        assert_eq!(meta.tool_version, TOOL_VERSION);
    }

    #[test]
    fn init_unknown_seed_errors() {
        let root = tempfile::tempdir().unwrap();
        let err = init_workspace("ghost", &root.path().join("ws"), root.path()).unwrap_err();
        assert!(err.to_string().contains("ghost"));
    }

    #[test]
    fn write_workspace_skips_empty_content() {
        let dir = tempfile::tempdir().unwrap();
        let documents = vec![
            ("A.md".to_string(), "content".to_string()),
            ("B.md".to_string(), "   \n".to_string()),
        ];
        let written = write_workspace(&documents, dir.path()).unwrap();
        assert_eq!(written, vec![dir.path().join("A.md")]);
        assert!(!dir.path().join("B.md").exists());
    }
}
