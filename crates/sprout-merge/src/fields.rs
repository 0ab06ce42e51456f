//! Labeled numeric field extraction and injection.
//!
//! Documents carry small structured records inside otherwise opaque prose:
//! headings of the form `### Curiosity (0.85)`. Extraction reads them into a
//! map, injection rewrites only the numeric payload in place and leaves the
//! rest of the document byte-for-byte untouched.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::Regex;

/// Matches field headings like `### Curiosity (0.85)` with varying
/// whitespace. Also matches negative numbers and numbers > 1 for clamping.
fn field_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"###\s*([A-Za-z_][A-Za-z0-9_ ]*?)\s*\(\s*(-?[0-9.]+)\s*\)")
            .expect("field pattern is valid")
    })
}

/// Extract labeled numeric fields from document text.
///
/// Returns a map of field name → value clamped to [0.0, 1.0]. Entries whose
/// payload does not parse as a number are silently dropped. Empty input
/// yields an empty map.
pub fn extract_field_values(text: &str) -> BTreeMap<String, f64> {
    let mut values = BTreeMap::new();

    for caps in field_pattern().captures_iter(text) {
        let name = caps[1].trim().to_string();
        if let Ok(value) = caps[2].parse::<f64>() {
            values.insert(name, value.clamp(0.0, 1.0));
        }
    }

    values
}

/// Rewrite the numeric payload of every field in `values` whose heading
/// appears in `text`, preserving the heading's whitespace style.
///
/// Names absent from `text` are ignored, never appended. An empty map
/// returns the text unchanged.
pub fn apply_field_values(text: &str, values: &BTreeMap<String, f64>) -> String {
    if values.is_empty() {
        return text.to_string();
    }

    let mut result = text.to_string();

    for (name, value) in values {
        let pattern = format!(r"(###\s*){}(\s*)\(\s*[0-9.]+\s*\)", regex::escape(name));
        // The pattern is built from an escaped literal; compilation cannot
        // fail for any field name extraction can produce.
        let Ok(re) = Regex::new(&pattern) else {
            continue;
        };
        result = re
            .replace_all(&result, |caps: &regex::Captures<'_>| {
                format!("{}{}{}({})", &caps[1], name, &caps[2], value)
            })
            .into_owned();
    }

    result
}
