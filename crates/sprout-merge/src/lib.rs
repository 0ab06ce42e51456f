//! Merge engine for workspace updates.
//!
//! Combines local (possibly hand-edited) documents with freshly regenerated
//! upstream content while preserving user-authored state: field values, the
//! evolving story section, and accumulated skill tokens.
//!
//! Parsing is lenient since users may have hand-edited files, and every
//! merge is total: on parse failure the original content (or empty) is
//! returned, never an error.
//!
//! # Key Items
//!
//! - [`MergeStrategy`] — closed set of per-document merge algorithms
//! - [`strategy_for`] — document name → strategy lookup (never fails)
//! - [`fields`] — labeled numeric field extraction/injection
//! - [`section`] — heading-delimited section extraction
//! - [`tokens`] — bracketed token set extraction

pub mod fields;
pub mod section;
pub mod strategy;
pub mod tokens;

pub use fields::{apply_field_values, extract_field_values};
pub use section::extract_section;
pub use strategy::{
    section_merge, smart_merge, strategy_for, union_merge, MergeStrategy, PLACEHOLDER_SKILL,
    STORY_HEADING,
};
pub use tokens::extract_tokens;
