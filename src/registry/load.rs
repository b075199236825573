//! Registry loading
//!
//! Loads an operator registry from disk. The format is detected from the file
//! extension: `.yaml`/`.yml` or `.json`.

use super::Registry;
use crate::{Error, Result};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

/// Load an operator registry from a file.
///
/// # Arguments
///
/// * `path` - Registry file path; extension selects the parser
///
/// Duplicate operator names are a fatal configuration error: classification
/// results are keyed by name and a duplicate would make derived tables
/// ambiguous.
///
/// # Example
///
/// ```no_run
/// use clasificar::registry::load_registry;
///
/// let registry = load_registry("operators.yaml").expect("failed to load registry");
/// println!("{} operators", registry.len());
/// ```
pub fn load_registry(path: impl AsRef<Path>) -> Result<Registry> {
    let path = path.as_ref();

    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .ok_or_else(|| Error::UnsupportedFormat("<none>".to_string()))?;

    let content = fs::read_to_string(path)?;

    let registry: Registry = match ext {
        "yaml" | "yml" => serde_yaml::from_str(&content)
            .map_err(|e| Error::Parse(format!("YAML deserialization failed: {e}")))?,
        "json" => serde_json::from_str(&content)
            .map_err(|e| Error::Parse(format!("JSON deserialization failed: {e}")))?,
        other => return Err(Error::UnsupportedFormat(other.to_string())),
    };

    check_unique_names(&registry)?;
    Ok(registry)
}

fn check_unique_names(registry: &Registry) -> Result<()> {
    let mut seen = BTreeSet::new();
    for op in &registry.operators {
        if !seen.insert(op.name.as_str()) {
            return Err(Error::DuplicateOperator(op.name.clone()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_registry(suffix: &str, content: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(suffix)
            .tempfile()
            .expect("temp file");
        file.write_all(content.as_bytes()).expect("write registry");
        file
    }

    #[test]
    fn test_load_yaml_registry() {
        let file = write_registry(
            ".yaml",
            r#"
operators:
  - name: TFL_AddOp
    traits: [quantizable_result]
    arguments:
      - name: lhs
        constraint:
          supported_types: "tensor of 32-bit float values"
"#,
        );

        let registry = load_registry(file.path()).expect("load yaml");
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.operators[0].name, "TFL_AddOp");
    }

    #[test]
    fn test_load_json_registry() {
        let file = write_registry(
            ".json",
            r#"{"operators": [{"name": "TFL_MulOp", "traits": ["sparse_op"]}]}"#,
        );

        let registry = load_registry(file.path()).expect("load json");
        assert_eq!(registry.len(), 1);
        assert!(registry.operators[0].has_tag(crate::registry::tags::SPARSE_OP));
    }

    #[test]
    fn test_unsupported_extension() {
        let file = write_registry(".toml", "operators = []");
        let err = load_registry(file.path()).expect_err("toml must be rejected");
        assert!(matches!(err, Error::UnsupportedFormat(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_registry("/nonexistent/registry.yaml").expect_err("missing file");
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_malformed_yaml_is_parse_error() {
        let file = write_registry(".yaml", "operators: [name: {");
        let err = load_registry(file.path()).expect_err("malformed yaml");
        assert!(matches!(err, Error::Parse(_)));
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let file = write_registry(
            ".yaml",
            r#"
operators:
  - name: TFL_AddOp
  - name: TFL_AddOp
"#,
        );

        let err = load_registry(file.path()).expect_err("duplicate names");
        assert!(matches!(err, Error::DuplicateOperator(name) if name == "TFL_AddOp"));
    }
}
