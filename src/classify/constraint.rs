//! Type constraint evaluator
//!
//! Decides whether one argument's declared type constraint covers a required
//! set of canonical type names. Pure predicate; containment is substring
//! matching against the informal supported-types description, which is the
//! agreed-upon convention for "this type is supported".

use crate::registry::TypeConstraint;

/// Check whether an argument constraint satisfies a required type set.
///
/// * Absent constraint: the argument accepts any tensor type, which satisfies
///   an unconstrained per-tensor check but never a per-axis one. Per-channel
///   support must be explicitly declared.
/// * Present constraint: every required canonical name must occur as a
///   substring of the supported-types description.
pub fn satisfies(constraint: Option<&TypeConstraint>, required: &[&str], per_axis: bool) -> bool {
    let Some(constraint) = constraint else {
        return !per_axis;
    };

    required
        .iter()
        .all(|ty| constraint.supported_types.contains(ty))
}
