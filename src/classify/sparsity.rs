//! Sparsity classification
//!
//! Single-pass tag filter; the simplest of the classification rules.

use crate::registry::{tags, OperatorDef};
use std::collections::BTreeSet;

/// Operators whose weights support a sparse representation.
pub fn classify_sparse(ops: &[OperatorDef]) -> BTreeSet<String> {
    ops.iter()
        .filter(|op| op.has_tag(tags::SPARSE_OP))
        .map(|op| op.name.clone())
        .collect()
}
