//! Registry schema
//!
//! Serde data model for operator registry files. One registry entry per
//! computation primitive: a unique name, a set of capability tags, a
//! free-form extra declaration blob, and an ordered argument list.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Capability tag names recognized by the classification passes.
///
/// Tags are free strings in the registry; the classifier only inspects these
/// three. Unrecognized tags are carried through untouched.
pub mod tags {
    /// Operator results can be statically quantized.
    pub const QUANTIZABLE_RESULT: &str = "quantizable_result";
    /// Operator supports dynamic-range quantization.
    pub const DYNAMIC_RANGE_QUANTIZABLE: &str = "dynamic_range_quantizable";
    /// Operator weights can use a sparse representation.
    pub const SPARSE_OP: &str = "sparse_op";
}

/// Per-argument type constraint declaration.
///
/// The supported-types description is an informal human-oriented string;
/// canonical type names are tested for substring containment against it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeConstraint {
    /// Free-text description of the accepted tensor types
    pub supported_types: String,
}

/// One declared operator argument
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Argument {
    /// Argument name (e.g. "input", "filter", "bias")
    pub name: String,

    /// Type constraint; absence means the argument accepts any tensor type
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constraint: Option<TypeConstraint>,
}

/// One registry entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatorDef {
    /// Unique operator name
    pub name: String,

    /// Declared capability tags
    #[serde(default)]
    pub traits: BTreeSet<String>,

    /// Free-form declaration blob; may embed machine-checkable sentinel
    /// substrings such as a quantization-dimension accessor
    #[serde(default)]
    pub extra_declaration: String,

    /// Ordered argument list
    #[serde(default)]
    pub arguments: Vec<Argument>,
}

impl OperatorDef {
    /// Check whether the operator declares a capability tag.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.traits.contains(tag)
    }

    /// Extra declaration with embedded line breaks normalized to spaces.
    ///
    /// All textual sentinel checks run against this normalized form so that
    /// declarations wrapped across lines still match.
    pub fn normalized_declaration(&self) -> String {
        self.extra_declaration.replace('\n', " ")
    }
}

/// The full operator registry
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Registry {
    /// Operator definitions in declaration order
    pub operators: Vec<OperatorDef>,
}

impl Registry {
    /// Sort operators by name, ascending.
    ///
    /// Run once before classification so all passes observe the registry in
    /// the same canonical order and emitted tables are deterministic.
    pub fn sort_by_name(&mut self) {
        self.operators.sort_by(|a, b| a.name.cmp(&b.name));
    }

    /// Number of registered operators.
    pub fn len(&self) -> usize {
        self.operators.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.operators.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn op(name: &str) -> OperatorDef {
        OperatorDef {
            name: name.to_string(),
            traits: BTreeSet::new(),
            extra_declaration: String::new(),
            arguments: Vec::new(),
        }
    }

    #[test]
    fn test_has_tag() {
        let mut def = op("TFL_AddOp");
        def.traits.insert(tags::QUANTIZABLE_RESULT.to_string());

        assert!(def.has_tag(tags::QUANTIZABLE_RESULT));
        assert!(!def.has_tag(tags::SPARSE_OP));
    }

    #[test]
    fn test_normalized_declaration_replaces_line_breaks() {
        let mut def = op("TFL_Conv2DOp");
        def.extra_declaration = "int GetQuantizationDimIndex()\n{ return 3; }".to_string();

        assert_eq!(
            def.normalized_declaration(),
            "int GetQuantizationDimIndex() { return 3; }"
        );
    }

    #[test]
    fn test_sort_by_name() {
        let mut registry = Registry {
            operators: vec![op("TFL_MulOp"), op("TFL_AddOp"), op("TFL_Conv2DOp")],
        };
        registry.sort_by_name();

        let names: Vec<&str> = registry.operators.iter().map(|o| o.name.as_str()).collect();
        assert_eq!(names, vec!["TFL_AddOp", "TFL_Conv2DOp", "TFL_MulOp"]);
    }

    #[test]
    fn test_deserialize_minimal_operator() {
        let yaml = "name: TFL_AbsOp";
        let def: OperatorDef = serde_yaml::from_str(yaml).expect("minimal operator");

        assert_eq!(def.name, "TFL_AbsOp");
        assert!(def.traits.is_empty());
        assert!(def.extra_declaration.is_empty());
        assert!(def.arguments.is_empty());
    }

    #[test]
    fn test_deserialize_full_operator() {
        let yaml = r#"
name: TFL_Conv2DOp
traits: [quantizable_result, sparse_op]
extra_declaration: |
  int GetQuantizationDimIndex() { return 3; }
arguments:
  - name: input
    constraint:
      supported_types: "tensor of 32-bit float or QI8 type values"
  - name: filter
"#;
        let def: OperatorDef = serde_yaml::from_str(yaml).expect("full operator");

        assert!(def.has_tag(tags::QUANTIZABLE_RESULT));
        assert!(def.has_tag(tags::SPARSE_OP));
        assert_eq!(def.arguments.len(), 2);
        assert!(def.arguments[0].constraint.is_some());
        assert!(def.arguments[1].constraint.is_none());
    }
}
