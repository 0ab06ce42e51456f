//! Merge strategies and per-document dispatch.
//!
//! Each workspace document is assigned one of five merge strategies. The
//! assignment is a closed, immutable table; unknown documents fall back to
//! [`MergeStrategy::Preserve`] so a hand-added file is never clobbered.

use std::collections::BTreeSet;

use tracing::debug;

use crate::fields::{apply_field_values, extract_field_values};
use crate::section::extract_section;
use crate::tokens::extract_tokens;

/// The heading of the section preserved by [`section_merge`].
pub const STORY_HEADING: &str = "## Our Story";

/// Placeholder skill token, only meaningful when it is the sole entry.
pub const PLACEHOLDER_SKILL: &str = "read_only";

/// How local and upstream content are combined for one document.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MergeStrategy {
    /// Upstream always wins; no user-mutable state in the document.
    Overwrite,
    /// Local always wins when present; purely free-form user content.
    Preserve,
    /// Upstream structure with local numeric field values.
    SmartMerge,
    /// Upstream content with the local story section carried over.
    SectionMerge,
    /// Union of capability tokens over upstream's structure.
    UnionMerge,
}

impl MergeStrategy {
    /// Apply this strategy to a pair of document contents.
    pub fn apply(self, local: Option<&str>, upstream: Option<&str>) -> String {
        match self {
            MergeStrategy::Overwrite => upstream.unwrap_or("").to_string(),
            MergeStrategy::Preserve => non_empty(local)
                .or(non_empty(upstream))
                .unwrap_or("")
                .to_string(),
            MergeStrategy::SmartMerge => smart_merge(local, upstream),
            MergeStrategy::SectionMerge => section_merge(local, upstream),
            MergeStrategy::UnionMerge => union_merge(local, upstream),
        }
    }
}

/// Look up the merge strategy for a document name.
///
/// Total over all names; documents outside the registry default to
/// [`MergeStrategy::Preserve`].
pub fn strategy_for(document: &str) -> MergeStrategy {
    match document {
        "IDENTITY.md" | "BOOTSTRAP.md" | "HEARTBEAT.md" => MergeStrategy::Overwrite,
        "SOUL.md" | "BOOT.md" => MergeStrategy::SmartMerge,
        "STORY.md" => MergeStrategy::SectionMerge,
        "AGENTS.md" => MergeStrategy::UnionMerge,
        "MEMORY.md" | "USER.md" | "EVOLUTION_LOG.md" => MergeStrategy::Preserve,
        _ => MergeStrategy::Preserve,
    }
}

fn non_empty(text: Option<&str>) -> Option<&str> {
    text.filter(|s| !s.is_empty())
}

/// Merge field-bearing documents, preserving local field values.
///
/// Upstream's structure, wording, and newly introduced fields win; only the
/// numeric value of fields present in both sides is taken from local. Fields
/// retired upstream are dropped.
pub fn smart_merge(local: Option<&str>, upstream: Option<&str>) -> String {
    let Some(upstream) = non_empty(upstream) else {
        return local.unwrap_or("").to_string();
    };
    let Some(local) = non_empty(local) else {
        return upstream.to_string();
    };

    let local_values = extract_field_values(local);
    debug!(fields = local_values.len(), "smart merge carrying local field values");
    apply_field_values(upstream, &local_values)
}

/// Merge story documents, preserving the local `## Our Story` section.
pub fn section_merge(local: Option<&str>, upstream: Option<&str>) -> String {
    let Some(upstream) = non_empty(upstream) else {
        return local.unwrap_or("").to_string();
    };
    let Some(local) = non_empty(local) else {
        return upstream.to_string();
    };

    let Some(local_section) = extract_section(local, STORY_HEADING) else {
        // Nothing local to preserve.
        return upstream.to_string();
    };

    match extract_section(upstream, STORY_HEADING) {
        Some(upstream_section) => upstream.replace(&upstream_section, &local_section),
        None => format!("{}\n\n{}\n", upstream.trim_end(), local_section),
    }
}

/// Merge capability documents by token union over upstream's structure.
///
/// The placeholder token is dropped whenever any other token exists. The
/// union is rendered sorted so output is reproducible across runs.
pub fn union_merge(local: Option<&str>, upstream: Option<&str>) -> String {
    let Some(upstream) = non_empty(upstream) else {
        return local.unwrap_or("").to_string();
    };
    let Some(local) = non_empty(local) else {
        return upstream.to_string();
    };

    let mut all: BTreeSet<String> = extract_tokens(local);
    all.extend(extract_tokens(upstream));

    if all.len() > 1 {
        all.remove(PLACEHOLDER_SKILL);
    }

    let mut lines: Vec<String> = Vec::new();

    // Upstream preamble: everything before the first token bullet.
    for line in upstream.lines() {
        if line.starts_with("- `") {
            break;
        }
        lines.push(line.to_string());
    }

    for token in &all {
        lines.push(format!("- `{token}`"));
    }

    // Trailing prose from upstream, after the token list.
    let mut trailing: Vec<String> = Vec::new();
    let mut seen_tokens = false;
    for line in upstream.lines() {
        if line.starts_with("- `") {
            seen_tokens = true;
        } else if seen_tokens && !line.trim().is_empty() && !line.starts_with('-') {
            trailing.push(line.to_string());
        }
    }

    lines.push(String::new());
    lines.extend(trailing);

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_covers_registry() {
        assert_eq!(strategy_for("IDENTITY.md"), MergeStrategy::Overwrite);
        assert_eq!(strategy_for("BOOTSTRAP.md"), MergeStrategy::Overwrite);
        assert_eq!(strategy_for("HEARTBEAT.md"), MergeStrategy::Overwrite);
        assert_eq!(strategy_for("SOUL.md"), MergeStrategy::SmartMerge);
        assert_eq!(strategy_for("BOOT.md"), MergeStrategy::SmartMerge);
        assert_eq!(strategy_for("STORY.md"), MergeStrategy::SectionMerge);
        assert_eq!(strategy_for("AGENTS.md"), MergeStrategy::UnionMerge);
        assert_eq!(strategy_for("MEMORY.md"), MergeStrategy::Preserve);
        assert_eq!(strategy_for("USER.md"), MergeStrategy::Preserve);
        assert_eq!(strategy_for("EVOLUTION_LOG.md"), MergeStrategy::Preserve);
    }

    #[test]
    fn lookup_defaults_to_preserve() {
        assert_eq!(strategy_for("NOTES.md"), MergeStrategy::Preserve);
        assert_eq!(strategy_for(""), MergeStrategy::Preserve);
    }

    // --- smart_merge ---

    #[test]
    fn smart_merge_preserves_local_values() {
        let local = "### Curiosity (0.9)\nOld desc.";
        let upstream = "### Curiosity (0.5)\nNew desc.";
        let merged = smart_merge(Some(local), Some(upstream));
        assert_eq!(merged, "### Curiosity (0.9)\nNew desc.");
    }

    #[test]
    fn smart_merge_scenario() {
        let local = "### Curiosity (0.9)\n\n### Loyalty (0.2)\n";
        let upstream = "### Curiosity (0.5)\n\n### Empathy (0.7)\n";
        let merged = smart_merge(Some(local), Some(upstream));

        // Local value wins for shared fields.
        assert!(merged.contains("### Curiosity (0.9)"));
        // New upstream field adopts its default.
        assert!(merged.contains("### Empathy (0.7)"));
        // Retired local field is dropped.
        assert!(!merged.contains("Loyalty"));
    }

    #[test]
    fn smart_merge_empty_upstream_returns_local() {
        assert_eq!(smart_merge(Some("local"), None), "local");
        assert_eq!(smart_merge(Some("local"), Some("")), "local");
        assert_eq!(smart_merge(None, None), "");
    }

    #[test]
    fn smart_merge_empty_local_adopts_upstream() {
        let upstream = "### Curiosity (0.5)";
        assert_eq!(smart_merge(None, Some(upstream)), upstream);
    }

    #[test]
    fn smart_merge_is_idempotent() {
        let local = "### Curiosity (0.9)\n### Empathy (0.3)\n";
        let upstream = "### Curiosity (0.5)\n### Empathy (0.7)\n### Order (0.4)\n";
        let once = smart_merge(Some(local), Some(upstream));
        let twice = smart_merge(Some(&once), Some(upstream));
        assert_eq!(once, twice);
    }

    // --- section_merge ---

    #[test]
    fn section_merge_preserves_local_section() {
        let local = "## Our Story\n\nLocal X";
        let upstream = "## Who I Am\n\nBio.\n\n## Our Story\n\nUpstream Y";
        let merged = section_merge(Some(local), Some(upstream));
        assert!(merged.contains("Local X"));
        assert!(!merged.contains("Upstream Y"));
        assert!(merged.contains("## Who I Am"));
    }

    #[test]
    fn section_merge_without_local_section_keeps_upstream() {
        let local = "# Freeform notes, no story heading";
        let upstream = "## Our Story\n\nUpstream story.";
        assert_eq!(section_merge(Some(local), Some(upstream)), upstream);
    }

    #[test]
    fn section_merge_appends_when_upstream_lacks_section() {
        let local = "## Our Story\n\nOur chapter.";
        let upstream = "## Who I Am\n\nBio.\n";
        let merged = section_merge(Some(local), Some(upstream));
        assert_eq!(merged, "## Who I Am\n\nBio.\n\n## Our Story\n\nOur chapter.\n");
    }

    #[test]
    fn section_merge_empty_sides() {
        assert_eq!(section_merge(None, Some("up")), "up");
        assert_eq!(section_merge(Some("loc"), None), "loc");
        assert_eq!(section_merge(None, None), "");
    }

    // --- union_merge ---

    #[test]
    fn union_merge_combines_tokens() {
        let local = "# Tools\n\n- `fs.read`\n";
        let upstream = "# Tools\n\n- `shell.exec`\n";
        let merged = union_merge(Some(local), Some(upstream));
        assert!(merged.contains("- `fs.read`"));
        assert!(merged.contains("- `shell.exec`"));
    }

    #[test]
    fn union_merge_drops_placeholder_when_real_tokens_exist() {
        let local = "- `a`\n- `read_only`\n";
        let upstream = "- `a`\n- `b`\n";
        let merged = union_merge(Some(local), Some(upstream));
        let tokens = extract_tokens(&merged);
        assert_eq!(
            tokens.iter().map(String::as_str).collect::<Vec<_>>(),
            vec!["a", "b"]
        );
    }

    #[test]
    fn union_merge_keeps_sole_placeholder() {
        let local = "- `read_only`\n";
        let upstream = "- `read_only`\n";
        let merged = union_merge(Some(local), Some(upstream));
        assert!(merged.contains("- `read_only`"));
    }

    #[test]
    fn union_merge_is_monotonic() {
        let local = "- `fs.read`\n- `net.fetch`\n";
        let upstream = "- `fs.read`\n- `shell.exec`\n";
        let merged = union_merge(Some(local), Some(upstream));
        let tokens = extract_tokens(&merged);
        assert!(tokens.len() >= 2);
        assert!(tokens.contains("net.fetch"));
        assert!(tokens.contains("shell.exec"));
    }

    #[test]
    fn union_merge_output_is_sorted() {
        let local = "- `zeta`\n";
        let upstream = "- `alpha`\n";
        let merged = union_merge(Some(local), Some(upstream));
        let alpha = merged.find("- `alpha`").unwrap();
        let zeta = merged.find("- `zeta`").unwrap();
        assert!(alpha < zeta);
    }

    #[test]
    fn union_merge_keeps_upstream_preamble_and_trailing_note() {
        let local = "- `fs.read`\n";
        let upstream = "# Available Tools\n\n- `shell.exec`\n\n> **Note:** more later.\n";
        let merged = union_merge(Some(local), Some(upstream));
        assert!(merged.starts_with("# Available Tools"));
        assert!(merged.contains("> **Note:** more later."));
    }

    #[test]
    fn union_merge_empty_sides() {
        assert_eq!(union_merge(None, Some("- `a`\n")), "- `a`\n");
        assert_eq!(union_merge(Some("- `a`\n"), None), "- `a`\n");
    }

    // --- strategy dispatch ---

    #[test]
    fn overwrite_ignores_local() {
        let out = MergeStrategy::Overwrite.apply(Some("local"), Some("upstream"));
        assert_eq!(out, "upstream");
    }

    #[test]
    fn preserve_keeps_local() {
        let out = MergeStrategy::Preserve.apply(Some("local"), Some("upstream"));
        assert_eq!(out, "local");
    }

    #[test]
    fn preserve_falls_back_to_upstream() {
        let out = MergeStrategy::Preserve.apply(None, Some("upstream"));
        assert_eq!(out, "upstream");
    }
}
