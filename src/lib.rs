//! Clasificar: Operator Quantization Coverage Spec Generator
//!
//! Build-time generator that classifies a declarative operator registry by
//! the quantization strategies each operator supports, and emits static
//! lookup tables for consumption by a quantization engine at runtime.
//!
//! Seven coverage categories are produced per run:
//! - Static int8, per-axis and per-tensor
//! - Static uint8, per-axis and per-tensor
//! - Dynamic-range full kernel support
//! - Dynamic-range weight-only fallback
//! - Sparsity
//!
//! # Example
//!
//! ```no_run
//! use clasificar::emit::CoverageSpec;
//! use clasificar::classify::TypeTable;
//! use clasificar::registry::load_registry;
//!
//! let registry = load_registry("operators.yaml").expect("failed to load registry");
//! let spec = CoverageSpec::generate(&registry, &TypeTable::default()).expect("classification");
//! spec.write_to(&mut std::io::stdout()).expect("emit");
//! ```

pub mod classify;
pub mod cli;
pub mod emit;
pub mod error;
pub mod registry;

pub use error::{Error, Result};
