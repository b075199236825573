//! Crate-wide error type
//!
//! Classification either completes for the whole registry or fails outright;
//! every variant here aborts the run before any artifact is written.

use thiserror::Error;

/// Generator errors
#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Registry parse error: {0}")]
    Parse(String),

    #[error("Unsupported registry extension: {0} (expected yaml, yml, or json)")]
    UnsupportedFormat(String),

    #[error("Duplicate operator name in registry: {0}")]
    DuplicateOperator(String),

    #[error("Unknown canonical type code: {0}")]
    UnknownTypeCode(String),

    #[error("Operator {0} carries the quantizable result tag but declares no arguments")]
    NoArguments(String),
}

/// Result type for generator operations
pub type Result<T> = std::result::Result<T, Error>;
