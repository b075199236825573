//! Operator registry view
//!
//! Read-only data model for the declarative operator registry consumed by the
//! classification passes, plus the file loader. The registry is treated as
//! already validated upstream: the loader checks structure and name
//! uniqueness, nothing else.

mod load;
mod schema;

pub use load::load_registry;
pub use schema::{tags, Argument, OperatorDef, Registry, TypeConstraint};
