//! Coverage spec emitter
//!
//! Runs all classification passes over a registry and renders the results as
//! read-only Rust lookup tables. Nothing is written until every pass has
//! completed, so a failed run emits no artifact at all.

use crate::classify::{
    classify_dynamic_range, classify_sparse, classify_static, TypeTable,
};
use crate::registry::Registry;
use crate::Result;
use std::collections::BTreeSet;
use std::io::Write;

/// The seven coverage categories, in emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecCategory {
    StaticInt8PerAxis,
    StaticInt8PerTensor,
    StaticUint8PerAxis,
    StaticUint8PerTensor,
    DynamicRangeFullSupport,
    DynamicRangeWeightOnly,
    Sparsity,
}

impl SpecCategory {
    /// All categories in stable emission order.
    pub const ALL: [SpecCategory; 7] = [
        SpecCategory::StaticInt8PerAxis,
        SpecCategory::StaticInt8PerTensor,
        SpecCategory::StaticUint8PerAxis,
        SpecCategory::StaticUint8PerTensor,
        SpecCategory::DynamicRangeFullSupport,
        SpecCategory::DynamicRangeWeightOnly,
        SpecCategory::Sparsity,
    ];

    /// Name of the emitted lookup table.
    pub fn table_name(&self) -> &'static str {
        match self {
            SpecCategory::StaticInt8PerAxis => "STATIC_INT8_PER_AXIS_SPEC",
            SpecCategory::StaticInt8PerTensor => "STATIC_INT8_PER_TENSOR_SPEC",
            SpecCategory::StaticUint8PerAxis => "STATIC_UINT8_PER_AXIS_SPEC",
            SpecCategory::StaticUint8PerTensor => "STATIC_UINT8_PER_TENSOR_SPEC",
            SpecCategory::DynamicRangeFullSupport => "DYNAMIC_RANGE_SPEC",
            SpecCategory::DynamicRangeWeightOnly => "DYNAMIC_RANGE_WEIGHT_ONLY_SPEC",
            SpecCategory::Sparsity => "SPARSITY_SPEC",
        }
    }

    /// Human-readable category label (used by `info` output).
    pub fn label(&self) -> &'static str {
        match self {
            SpecCategory::StaticInt8PerAxis => "static int8 per-axis",
            SpecCategory::StaticInt8PerTensor => "static int8 per-tensor",
            SpecCategory::StaticUint8PerAxis => "static uint8 per-axis",
            SpecCategory::StaticUint8PerTensor => "static uint8 per-tensor",
            SpecCategory::DynamicRangeFullSupport => "dynamic-range full support",
            SpecCategory::DynamicRangeWeightOnly => "dynamic-range weight-only fallback",
            SpecCategory::Sparsity => "sparsity",
        }
    }
}

/// Fully classified coverage spec, ready for emission.
#[derive(Debug, Clone)]
pub struct CoverageSpec {
    static_int8_per_axis: BTreeSet<String>,
    static_int8_per_tensor: BTreeSet<String>,
    static_uint8_per_axis: BTreeSet<String>,
    static_uint8_per_tensor: BTreeSet<String>,
    dynamic_range_full: BTreeSet<String>,
    dynamic_range_weight_only: BTreeSet<String>,
    sparsity: BTreeSet<String>,
}

impl CoverageSpec {
    /// Run all seven classification passes over a registry.
    ///
    /// Operators are sorted by name once up front so every pass observes the
    /// same canonical order; membership itself is order-independent.
    pub fn generate(registry: &Registry, table: &TypeTable) -> Result<CoverageSpec> {
        let mut registry = registry.clone();
        registry.sort_by_name();
        let ops = &registry.operators;

        let dynamic = classify_dynamic_range(ops);

        Ok(CoverageSpec {
            static_int8_per_axis: classify_static(ops, table, true, true)?,
            static_int8_per_tensor: classify_static(ops, table, true, false)?,
            static_uint8_per_axis: classify_static(ops, table, false, true)?,
            static_uint8_per_tensor: classify_static(ops, table, false, false)?,
            dynamic_range_full: dynamic.full_support,
            dynamic_range_weight_only: dynamic.weight_only_fallback,
            sparsity: classify_sparse(ops),
        })
    }

    /// Result set for one category.
    pub fn category(&self, category: SpecCategory) -> &BTreeSet<String> {
        match category {
            SpecCategory::StaticInt8PerAxis => &self.static_int8_per_axis,
            SpecCategory::StaticInt8PerTensor => &self.static_int8_per_tensor,
            SpecCategory::StaticUint8PerAxis => &self.static_uint8_per_axis,
            SpecCategory::StaticUint8PerTensor => &self.static_uint8_per_tensor,
            SpecCategory::DynamicRangeFullSupport => &self.dynamic_range_full,
            SpecCategory::DynamicRangeWeightOnly => &self.dynamic_range_weight_only,
            SpecCategory::Sparsity => &self.sparsity,
        }
    }

    /// Render all tables as Rust source.
    ///
    /// Output is byte-identical across runs over an unchanged registry:
    /// categories are emitted in fixed order and members in sorted order.
    pub fn write_to(&self, out: &mut impl Write) -> Result<()> {
        writeln!(out, "//! Operator quantization coverage tables.")?;
        writeln!(out, "//!")?;
        writeln!(out, "//! Generated by clasificar. Do not edit.")?;

        for category in SpecCategory::ALL {
            writeln!(out)?;
            writeln!(out, "pub static {}: &[&str] = &[", category.table_name())?;
            for name in self.category(category) {
                writeln!(out, "    {name:?},")?;
            }
            writeln!(out, "];")?;
        }

        Ok(())
    }
}
