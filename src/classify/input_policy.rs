//! Input-activation resolution policy
//!
//! Static classification checks the type constraint of an operator's input
//! activation. The registry does not mark that argument structurally, so
//! resolution follows a single named convention: the argument named "input"
//! if one exists, otherwise the first declared argument.

use crate::registry::OperatorDef;

/// Index of the argument treated as the input activation.
///
/// When multiple arguments are named "input" the last one wins; argument
/// names are unique in practice, so this only matters for malformed entries.
pub fn input_activation_index(op: &OperatorDef) -> usize {
    op.arguments
        .iter()
        .rposition(|arg| arg.name == "input")
        .unwrap_or(0)
}
