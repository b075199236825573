//! Static quantization classification
//!
//! Decides which operators support static (conversion-time) quantization for
//! one of four categories: {signed int8, unsigned uint8} x {per-axis,
//! per-tensor}. Each category is an independent invocation of the same
//! algorithm, never a refinement of another category's result.

use super::constraint::satisfies;
use super::input_policy::input_activation_index;
use super::type_table::TypeTable;
use crate::registry::{tags, OperatorDef};
use crate::{Error, Result};
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

/// A declared quantization-dimension accessor returning a literal
/// non-negative index. A declared index of -1 means per-channel quantization
/// is unsupported, so the pattern requires digits only.
static DIM_INDEX_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"int GetQuantizationDimIndex\(\) \{ return \d+; \}")
        .expect("Invalid dim-index regex")
});

/// Classify operators for one static quantization category.
///
/// * `signed` selects the QI8 (true) or QUI8 (false) required type alongside
///   F32.
/// * `per_axis` selects the per-channel category, which additionally requires
///   a quantization-dimension accessor in the operator's extra declaration.
///
/// Operators whose declarations do not follow the textual convention are
/// silently excluded; a tagged operator with no arguments at all is a fatal
/// registry configuration error.
pub fn classify_static(
    ops: &[OperatorDef],
    table: &TypeTable,
    signed: bool,
    per_axis: bool,
) -> Result<BTreeSet<String>> {
    let quant_code = if signed { "QI8" } else { "QUI8" };
    let required = [table.description("F32")?, table.description(quant_code)?];

    let mut result = BTreeSet::new();

    for op in ops {
        if !op.has_tag(tags::QUANTIZABLE_RESULT) {
            continue;
        }
        if op.arguments.is_empty() {
            return Err(Error::NoArguments(op.name.clone()));
        }

        let input = &op.arguments[input_activation_index(op)];
        if !satisfies(input.constraint.as_ref(), &required, per_axis) {
            continue;
        }

        if per_axis && !DIM_INDEX_REGEX.is_match(&op.normalized_declaration()) {
            continue;
        }

        result.insert(op.name.clone());
    }

    Ok(result)
}
