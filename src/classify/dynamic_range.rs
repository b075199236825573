//! Dynamic-range classification
//!
//! Splits dynamic-range-quantizable operators by kernel support: operators
//! whose declaration carries the kernel-support sentinel get the full
//! dynamic-range path; the rest fall back to weight-only quantization.

use crate::registry::{tags, OperatorDef};
use std::collections::BTreeSet;

/// Kernel-support sentinel tested against the normalized extra declaration.
const KERNEL_SUPPORT_SENTINEL: &str = "bool GetDynamicRangeQuantKernelSupport() { return true; }";

/// Dynamic-range classification result.
///
/// The two sets partition the dynamic-range-quantizable operators: every
/// tagged operator lands in exactly one of them, untagged operators in
/// neither.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DynamicRangeSpec {
    /// Operators with a declared dynamic-range kernel path
    pub full_support: BTreeSet<String>,
    /// Tagged operators without a kernel path; weight-only fallback
    pub weight_only_fallback: BTreeSet<String>,
}

/// Classify operators for dynamic-range quantization.
pub fn classify_dynamic_range(ops: &[OperatorDef]) -> DynamicRangeSpec {
    let mut spec = DynamicRangeSpec::default();

    for op in ops {
        if !op.has_tag(tags::DYNAMIC_RANGE_QUANTIZABLE) {
            continue;
        }

        if op.normalized_declaration().contains(KERNEL_SUPPORT_SENTINEL) {
            spec.full_support.insert(op.name.clone());
        } else {
            spec.weight_only_fallback.insert(op.name.clone());
        }
    }

    spec
}
