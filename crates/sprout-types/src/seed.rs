//! The seed data model.
//!
//! A seed is the structured definition a workspace is generated from. It is
//! data, not mutable state: every struct here is plain old data with value
//! semantics.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Seed identity metadata.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SeedMeta {
    pub seed_id: String,
    pub name: String,
    /// Seed version, accepted as a number or a numeric string on read.
    #[serde(deserialize_with = "crate::lenient::lenient_f64")]
    pub version: f64,
    #[serde(default)]
    pub created_at: String,
}

/// Layer 1: the immutable core — drives and prime directives.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Nucleus {
    /// Drive name → strength in [0.0, 1.0]. Sorted for deterministic output.
    pub drives: BTreeMap<String, f64>,
    pub prime_directives: Vec<String>,
}

/// Layer 2: evolving state — mission, memory, skills.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Persona {
    #[serde(default)]
    pub current_mission: Option<String>,
    #[serde(default)]
    pub mission_lock: bool,
    #[serde(default)]
    pub memory_summary: String,
    #[serde(default)]
    pub unlocked_skills: Vec<String>,
}

/// Layer 3: expression style — tone, format, quirks.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pulse {
    #[serde(default)]
    pub tone: Vec<String>,
    #[serde(default = "default_formatting")]
    pub formatting_preference: String,
    #[serde(default)]
    pub quirks: Vec<String>,
}

fn default_formatting() -> String {
    "markdown".to_string()
}

/// A single remembered event in a seed's backstory.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StoryMemory {
    #[serde(default)]
    pub event: String,
    #[serde(default)]
    pub detail: String,
}

/// Optional character backstory.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Story {
    pub age: Option<String>,
    pub location: Option<String>,
    pub occupation: Option<String>,
    pub biography: Option<String>,
    pub daily_routine: Option<String>,
    pub memories: Vec<StoryMemory>,
    pub speech_examples: Vec<String>,
}

/// A complete seed record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Seed {
    pub meta: SeedMeta,
    pub nucleus: Nucleus,
    pub persona: Persona,
    pub pulse: Pulse,
    #[serde(default)]
    pub story: Option<Story>,
}
