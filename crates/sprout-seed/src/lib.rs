//! Seed resolution, loading, and validation.
//!
//! A seed lives on disk as a YAML file. This crate resolves names to paths,
//! lists the available catalog, and loads files into [`sprout_types::Seed`]
//! records after structural validation.
//!
//! # Key Items
//!
//! - [`resolve_seed_path`] — name or path → file path
//! - [`load_seed`] — read + validate + parse a seed file
//! - [`validate_file`] / [`validate_structure`] — schema checks that never fail
//! - [`list_seeds`] — catalog of the seeds directory

pub mod catalog;
pub mod error;
pub mod validate;

use std::fs;
use std::path::Path;

use sprout_types::Seed;
use tracing::debug;

pub use catalog::{default_seeds_dir, list_seeds, resolve_seed_path, SeedInfo};
pub use error::{SeedError, SeedResult};
pub use validate::{validate_file, validate_structure, ValidationResult};

/// Load a seed file: read, validate structure, parse into a [`Seed`].
pub fn load_seed(path: &Path) -> SeedResult<Seed> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(SeedError::NotFound(path.display().to_string()));
        }
        Err(e) => return Err(SeedError::Io(e)),
    };

    if text.trim().is_empty() {
        return Err(SeedError::Empty(path.display().to_string()));
    }

    let value: serde_yaml::Value = serde_yaml::from_str(&text)?;

    let errors = validate_structure(&value);
    if !errors.is_empty() {
        return Err(SeedError::Validation {
            path: path.display().to_string(),
            errors,
        });
    }

    let seed: Seed = serde_yaml::from_value(value)?;
    debug!(seed_id = %seed.meta.seed_id, version = seed.meta.version, "seed loaded");
    Ok(seed)
}
