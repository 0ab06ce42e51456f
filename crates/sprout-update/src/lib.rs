//! Workspace lifecycle: initialization, metadata, backups, and updates.
//!
//! A workspace is a directory of markdown documents generated from a seed,
//! plus a `.sprout/` directory holding metadata and backups. This crate
//! creates workspaces ([`init_workspace`]) and evolves them in place when a
//! seed changes ([`update_workspace`]), applying per-document merge
//! strategies from `sprout-merge` so user state survives the update.
//!
//! # Key Items
//!
//! - [`init_workspace`] / [`write_workspace`] — first-time generation
//! - [`update_workspace`] / [`UpdateOptions`] — the update pipeline
//! - [`UpdateReport`] / [`FileChange`] — structured outcome of a run
//! - [`WorkspaceMeta`] — the `.sprout/meta.json` record
//! - [`create_backup`] — timestamped pre-update snapshots

pub mod backup;
pub mod error;
pub mod init;
pub mod meta;
pub mod report;
pub mod update;

pub use backup::{create_backup, has_documents, workspace_documents, BACKUPS_DIR};
pub use error::{UpdateError, UpdateResult};
pub use init::{init_workspace, write_workspace};
pub use meta::{meta_path, read_meta, write_meta, WorkspaceMeta, META_DIR, META_FILE, TOOL_VERSION};
pub use report::{ChangeAction, FileChange, UpdateReport};
pub use update::{update_workspace, UpdateOptions};
