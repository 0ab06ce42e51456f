//! Bracketed token set extraction.
//!
//! Capability lists are rendered as bullet lines with backticked tokens,
//! `- `fs.read``. Extraction collects the inner content of every such
//! bullet; duplicates collapse by set semantics.

use std::collections::BTreeSet;
use std::sync::OnceLock;

use regex::Regex;

fn token_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"-\s*`([^`]+)`").expect("token pattern is valid"))
}

/// Extract the set of backticked bullet tokens from document text.
///
/// Empty input yields an empty set.
pub fn extract_tokens(text: &str) -> BTreeSet<String> {
    token_pattern()
        .captures_iter(text)
        .map(|caps| caps[1].to_string())
        .collect()
}
