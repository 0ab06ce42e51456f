//! Structural seed validation.
//!
//! The schema is deliberately shallow: required roots, required fields per
//! root, and drive values that must be numbers in [0.0, 1.0]. Validation
//! returns error strings rather than failing, so callers can report every
//! problem at once.

use std::path::Path;

use serde_yaml::{Mapping, Value};

const REQUIRED_ROOTS: [&str; 4] = ["meta", "nucleus", "persona", "pulse"];
const META_FIELDS: [&str; 3] = ["seed_id", "name", "version"];
const NUCLEUS_FIELDS: [&str; 2] = ["drives", "prime_directives"];
const PERSONA_FIELDS: [&str; 3] = ["current_mission", "unlocked_skills", "memory_summary"];
const PULSE_FIELDS: [&str; 2] = ["tone", "formatting_preference"];

/// Outcome of validating one seed file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationResult {
    pub path: String,
    pub errors: Vec<String>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Validate a raw YAML value against the seed schema.
///
/// Returns a list of error messages, empty when valid.
pub fn validate_structure(data: &Value) -> Vec<String> {
    if !data.is_mapping() {
        return vec![format!("expected a YAML mapping, got {}", value_kind(data))];
    }

    let mut errors: Vec<String> = Vec::new();

    for root in REQUIRED_ROOTS {
        if data.get(root).is_none() {
            errors.push(format!("missing root section: '{root}'"));
        }
    }

    check_fields(data, "meta", &META_FIELDS, &mut errors);
    check_fields(data, "nucleus", &NUCLEUS_FIELDS, &mut errors);
    check_fields(data, "persona", &PERSONA_FIELDS, &mut errors);
    check_fields(data, "pulse", &PULSE_FIELDS, &mut errors);

    if let Some(drives) = data
        .get("nucleus")
        .and_then(|n| n.get("drives"))
        .and_then(Value::as_mapping)
    {
        check_drives(drives, &mut errors);
    }

    errors
}

/// Validate a single YAML seed file. Never fails; problems are reported as
/// error strings in the result.
pub fn validate_file(path: &Path) -> ValidationResult {
    let str_path = path.display().to_string();

    if !path.exists() {
        return ValidationResult {
            errors: vec![format!("file not found: {str_path}")],
            path: str_path,
        };
    }

    let is_yaml = path
        .extension()
        .and_then(|e| e.to_str())
        .map_or(false, |e| e == "yaml" || e == "yml");
    if !is_yaml {
        return ValidationResult {
            errors: vec![format!("not a YAML file: {str_path}")],
            path: str_path,
        };
    }

    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) => {
            return ValidationResult {
                errors: vec![format!("cannot read file: {e}")],
                path: str_path,
            };
        }
    };

    if text.trim().is_empty() {
        return ValidationResult {
            errors: vec!["file is empty".to_string()],
            path: str_path,
        };
    }

    let value: Value = match serde_yaml::from_str(&text) {
        Ok(value) => value,
        Err(e) => {
            return ValidationResult {
                errors: vec![format!("invalid YAML syntax: {e}")],
                path: str_path,
            };
        }
    };

    ValidationResult {
        errors: validate_structure(&value),
        path: str_path,
    }
}

fn check_fields(data: &Value, root: &str, fields: &[&str], errors: &mut Vec<String>) {
    let Some(section) = data.get(root).filter(|v| v.is_mapping()) else {
        return;
    };
    for field in fields {
        if section.get(field).is_none() {
            errors.push(format!("missing field in {root}: '{field}'"));
        }
    }
}

fn check_drives(drives: &Mapping, errors: &mut Vec<String>) {
    for (name, value) in drives {
        let name = name.as_str().unwrap_or("<non-string>");
        match numeric_value(value) {
            Some(v) if (0.0..=1.0).contains(&v) => {}
            Some(v) => {
                errors.push(format!("drive '{name}' value {v} out of range [0.0, 1.0]"));
            }
            None => {
                errors.push(format!(
                    "drive '{name}' value '{}' is not a number",
                    value_repr(value)
                ));
            }
        }
    }
}

fn numeric_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn value_repr(value: &Value) -> String {
    serde_yaml::to_string(value)
        .unwrap_or_default()
        .trim_end()
        .to_string()
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn parse(yaml: &str) -> Value {
        serde_yaml::from_str(yaml).unwrap()
    }

    const VALID: &str = r#"
meta:
  seed_id: x
  name: X
  version: 1.0
nucleus:
  drives:
    curiosity: 0.5
  prime_directives: [Be honest.]
persona:
  current_mission: null
  unlocked_skills: []
  memory_summary: ""
pulse:
  tone: [calm]
  formatting_preference: markdown
"#;

    #[test]
    fn valid_seed_has_no_errors() {
        assert!(validate_structure(&parse(VALID)).is_empty());
    }

    #[test]
    fn missing_root_reported() {
        let errors = validate_structure(&parse("meta:\n  seed_id: x\n  name: X\n  version: 1\n"));
        assert!(errors.iter().any(|e| e.contains("nucleus")));
        assert!(errors.iter().any(|e| e.contains("pulse")));
    }

    #[test]
    fn missing_meta_field_reported() {
        let yaml = VALID.replace("  seed_id: x\n", "");
        let errors = validate_structure(&parse(&yaml));
        assert!(errors.iter().any(|e| e.contains("seed_id")));
    }

    #[test]
    fn drive_out_of_range_reported() {
        let yaml = VALID.replace("curiosity: 0.5", "curiosity: 1.5");
        let errors = validate_structure(&parse(&yaml));
        assert!(errors.iter().any(|e| e.contains("out of range")));
    }

    #[test]
    fn drive_non_numeric_reported() {
        let yaml = VALID.replace("curiosity: 0.5", "curiosity: very");
        let errors = validate_structure(&parse(&yaml));
        assert!(errors.iter().any(|e| e.contains("is not a number")));
    }

    #[test]
    fn drive_numeric_string_accepted() {
        let yaml = VALID.replace("curiosity: 0.5", "curiosity: \"0.5\"");
        assert!(validate_structure(&parse(&yaml)).is_empty());
    }

    #[test]
    fn non_mapping_input_reported() {
        let errors = validate_structure(&parse("- just\n- a\n- list\n"));
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("sequence"));
    }

    #[test]
    fn validate_file_missing() {
        let result = validate_file(Path::new("/nonexistent.yaml"));
        assert!(!result.is_valid());
        assert!(result.errors[0].contains("file not found"));
    }

    #[test]
    fn validate_file_wrong_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("seed.txt");
        std::fs::File::create(&path)
            .unwrap()
            .write_all(b"meta: {}")
            .unwrap();
        let result = validate_file(&path);
        assert!(result.errors[0].contains("not a YAML file"));
    }

    #[test]
    fn validate_file_valid() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("seed.yaml");
        std::fs::File::create(&path)
            .unwrap()
            .write_all(VALID.as_bytes())
            .unwrap();
        assert!(validate_file(&path).is_valid());
    }
}
