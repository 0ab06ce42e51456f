//! Foundation types for Sprout.
//!
//! This crate provides the seed data model shared by every other Sprout
//! crate: a seed is the structured definition an agent workspace is
//! generated from.
//!
//! # Key Types
//!
//! - [`Seed`] — the complete seed record (meta, nucleus, persona, pulse, story)
//! - [`SeedMeta`] — seed identity and version
//! - [`lenient`] — deserializer accepting versions written as numbers or
//!   numeric strings

pub mod lenient;
pub mod seed;

pub use seed::{Nucleus, Persona, Pulse, Seed, SeedMeta, Story, StoryMemory};
