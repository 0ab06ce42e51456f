//! The update orchestrator.
//!
//! A sequential, single-threaded pipeline: read metadata, resolve and load
//! the upstream seed, regenerate content, back up, apply per-document merge
//! strategies, persist metadata. Fatal conditions before the mutation phase
//! produce a structured failure report and leave the filesystem untouched.
//!
//! Real runs are two-phase: every merge result is computed first, then all
//! documents are written via temp-file + atomic rename. A crash can still
//! leave a partially updated workspace (the backup is the recovery path),
//! but no document is ever written half-merged.
//!
//! Callers must ensure no concurrent mutation of the workspace during an
//! update; the engine assumes a single writer.

use std::fs;
use std::io::Write as _;
use std::path::{Path, PathBuf};

use chrono::Local;
use tracing::{debug, info};

use sprout_merge::{strategy_for, MergeStrategy};
use sprout_render::generate_workspace;
use sprout_seed::{default_seeds_dir, load_seed, resolve_seed_path};

use crate::backup::{create_backup, has_documents};
use crate::error::UpdateResult;
use crate::meta::{read_meta, write_meta, WorkspaceMeta, META_DIR, META_FILE, TOOL_VERSION};
use crate::report::{ChangeAction, FileChange, UpdateReport};

/// Options for one update invocation.
#[derive(Clone, Debug)]
pub struct UpdateOptions {
    /// Explicit seed to update to; defaults to the metadata's reference.
    pub seed_name: Option<String>,
    pub seeds_dir: PathBuf,
    /// Simulate without touching the filesystem.
    pub dry_run: bool,
    /// Proceed even when the workspace has no metadata.
    pub force: bool,
}

impl Default for UpdateOptions {
    fn default() -> Self {
        Self {
            seed_name: None,
            seeds_dir: default_seeds_dir(),
            dry_run: false,
            force: false,
        }
    }
}

/// Update a workspace to the current version of its seed.
///
/// Fatal conditions (missing metadata without force, unresolvable seed,
/// load/validation failure) return a failure report with `Ok`; `Err` is
/// reserved for I/O failures during the mutation phase.
pub fn update_workspace(workspace: &Path, opts: &UpdateOptions) -> UpdateResult<UpdateReport> {
    // Step 1: resolve local state.
    let local_meta = read_meta(workspace);
    if local_meta.is_none() && !opts.force {
        return Ok(UpdateReport::failure(
            0.0,
            0.0,
            format!("no {META_DIR}/{META_FILE} found; use --force to initialize"),
        ));
    }

    // Step 2: resolve the target seed name. An empty seed_file in older
    // metadata counts as absent.
    let target = opts.seed_name.clone().or_else(|| {
        local_meta.as_ref().map(|m| {
            m.seed_file
                .as_deref()
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .unwrap_or_else(|| m.seed_id.clone())
        })
    });
    let Some(target) = target else {
        return Ok(UpdateReport::failure(
            0.0,
            0.0,
            "no seed name specified and no metadata found",
        ));
    };

    let from_version = local_meta.as_ref().map_or(0.0, |m| m.installed_version);

    // Step 3: load the upstream seed.
    let seed = match resolve_seed_path(&target, &opts.seeds_dir).and_then(|path| load_seed(&path)) {
        Ok(seed) => seed,
        Err(e) => return Ok(UpdateReport::failure(from_version, 0.0, e.to_string())),
    };
    let to_version = seed.meta.version;
    debug!(seed = %target, from = from_version, to = to_version, "updating workspace");

    // Step 4: regenerate upstream content.
    let upstream = generate_workspace(&seed);

    // Step 5: backup, before anything is mutated.
    let mut backup_path: Option<PathBuf> = None;
    if !opts.dry_run && workspace.exists() && has_documents(workspace) {
        backup_path = Some(create_backup(workspace)?);
    }

    // Step 6: per-document strategy application.
    let mut changes: Vec<FileChange> = Vec::with_capacity(upstream.len());

    if opts.dry_run {
        for (filename, content) in &upstream {
            changes.push(plan_change(filename, content));
        }
    } else {
        // Phase one: compute every merge in memory.
        let mut pending: Vec<(PathBuf, String)> = Vec::new();
        for (filename, content) in &upstream {
            let (change, output) = merge_document(workspace, filename, content);
            if let Some(output) = output {
                pending.push((workspace.join(filename), output));
            }
            changes.push(change);
        }

        // Phase two: write everything. The directory may not exist yet when
        // forcing into a fresh workspace.
        fs::create_dir_all(workspace)?;
        for (path, output) in &pending {
            write_document(path, output)?;
        }
    }

    // Step 7: persist metadata.
    if !opts.dry_run {
        write_meta(
            workspace,
            &WorkspaceMeta {
                seed_id: seed.meta.seed_id.clone(),
                seed_name: seed.meta.name.clone(),
                seed_file: Some(target),
                installed_version: to_version,
                installed_at: Local::now().format("%Y-%m-%dT%H:%M:%S").to_string(),
                tool_version: TOOL_VERSION.to_string(),
            },
        )?;
    }

    info!(
        from = from_version,
        to = to_version,
        dry_run = opts.dry_run,
        "workspace update complete"
    );

    // Step 8: report.
    Ok(UpdateReport {
        success: true,
        from_version,
        to_version,
        changes,
        backup_path,
        conflicts: Vec::new(),
    })
}

/// Dry-run: describe what would happen without touching the filesystem.
fn plan_change(filename: &str, upstream: &str) -> FileChange {
    if upstream.trim().is_empty() {
        return FileChange::new(filename, ChangeAction::Skipped, "Empty upstream content");
    }

    let strategy = strategy_for(filename);
    let details = match strategy {
        MergeStrategy::Overwrite => "Would replace with upstream content",
        MergeStrategy::Preserve => "Would preserve local content",
        MergeStrategy::SmartMerge => "Would smart merge",
        MergeStrategy::SectionMerge => "Would section merge",
        MergeStrategy::UnionMerge => "Would union merge",
    };
    FileChange::new(filename, ChangeAction::from(strategy), details)
}

/// Compute the merge for one document. Returns the change record and the
/// content to write, or `None` when the local file is left untouched.
fn merge_document(workspace: &Path, filename: &str, upstream: &str) -> (FileChange, Option<String>) {
    if upstream.trim().is_empty() {
        return (
            FileChange::new(filename, ChangeAction::Skipped, "Empty upstream content"),
            None,
        );
    }

    let local = fs::read_to_string(workspace.join(filename)).ok();
    let strategy = strategy_for(filename);

    match strategy {
        MergeStrategy::Overwrite => (
            FileChange::new(
                filename,
                ChangeAction::Overwritten,
                "Replaced with upstream content",
            ),
            Some(upstream.to_string()),
        ),
        MergeStrategy::Preserve => match local {
            Some(_) => (
                FileChange::new(filename, ChangeAction::Preserved, "Local content preserved"),
                None,
            ),
            None => (
                FileChange::new(
                    filename,
                    ChangeAction::Overwritten,
                    "Created with upstream (no local file)",
                ),
                Some(upstream.to_string()),
            ),
        },
        MergeStrategy::SmartMerge => (
            FileChange::new(
                filename,
                ChangeAction::SmartMerged,
                "Smart merge (preserved local field values)",
            ),
            Some(strategy.apply(local.as_deref(), Some(upstream))),
        ),
        MergeStrategy::SectionMerge => (
            FileChange::new(
                filename,
                ChangeAction::SectionMerged,
                "Section merge (preserved 'Our Story' section)",
            ),
            Some(strategy.apply(local.as_deref(), Some(upstream))),
        ),
        MergeStrategy::UnionMerge => (
            FileChange::new(
                filename,
                ChangeAction::UnionMerged,
                "Union merge (combined skills)",
            ),
            Some(strategy.apply(local.as_deref(), Some(upstream))),
        ),
    }
}

/// Write a document via a temporary file and atomic rename.
pub(crate) fn write_document(path: &Path, content: &str) -> std::io::Result<()> {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(content.as_bytes())?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
