//! Workspace rendering: seed → document set.
//!
//! Pure data transformation, no filesystem access. The updater and the init
//! pipeline both consume [`generate_workspace`].
//!
//! # Key Items
//!
//! - [`generate_workspace`] — render every registered document from a seed
//! - [`templates::DOCUMENTS`] — the document registry, in generation order
//! - [`drives::translate_drive`] — numeric drive strength → prose

pub mod drives;
pub mod templates;

use sprout_types::Seed;

pub use drives::translate_drive;
pub use templates::{render_document, DOCUMENTS};

/// Render all workspace documents from a seed, in registry order.
pub fn generate_workspace(seed: &Seed) -> Vec<(String, String)> {
    DOCUMENTS
        .iter()
        .filter_map(|name| render_document(name, seed).map(|content| (name.to_string(), content)))
        .collect()
}
