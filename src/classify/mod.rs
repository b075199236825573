//! Classification passes
//!
//! Four independent predicates over the operator registry, one per
//! quantization strategy family:
//! - Static quantization (signed/unsigned, per-tensor/per-axis)
//! - Dynamic-range quantization, with kernel-support sub-classification
//! - Sparsity
//!
//! Each pass reads a shared, immutable registry view and produces its own
//! result set; no state is shared between passes. Textual sentinel checks
//! against operator declarations are isolated in [`constraint`] and the
//! per-pass modules so the convention can be swapped for structured
//! attributes later without touching the pass logic.

mod constraint;
mod dynamic_range;
mod input_policy;
mod sparsity;
mod static_quant;
mod type_table;

pub use constraint::satisfies;
pub use dynamic_range::{classify_dynamic_range, DynamicRangeSpec};
pub use input_policy::input_activation_index;
pub use sparsity::classify_sparse;
pub use static_quant::classify_static;
pub use type_table::TypeTable;
