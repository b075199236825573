//! Canonical type-name table
//!
//! Maps short type codes to the descriptive strings used in argument
//! supported-types declarations. Passed explicitly into the static
//! classification pass; immutable after construction.

use crate::{Error, Result};
use std::collections::BTreeMap;

/// Immutable mapping from short type codes to descriptive type names.
#[derive(Debug, Clone)]
pub struct TypeTable {
    entries: BTreeMap<&'static str, &'static str>,
}

impl TypeTable {
    /// Look up the descriptive string for a short type code.
    pub fn description(&self, code: &str) -> Result<&'static str> {
        self.entries
            .get(code)
            .copied()
            .ok_or_else(|| Error::UnknownTypeCode(code.to_string()))
    }

    /// Iterate over all known short codes.
    pub fn codes(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }
}

impl Default for TypeTable {
    fn default() -> Self {
        Self {
            entries: BTreeMap::from([
                ("F32", "32-bit float"),
                ("I32", "32-bit signless integer"),
                ("I64", "64-bit signless integer"),
                ("QI16", "QI16 type"),
                ("I8", "8-bit signless integer"),
                ("UI8", "8-bit unsigned integer"),
                ("QI8", "QI8 type"),
                ("QUI8", "QUI8 type"),
                ("TFL_Quint8", "TFLite quint8 type"),
            ]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_entries() {
        let table = TypeTable::default();
        assert_eq!(table.description("F32").unwrap(), "32-bit float");
        assert_eq!(table.description("QI8").unwrap(), "QI8 type");
        assert_eq!(table.description("QUI8").unwrap(), "QUI8 type");
        assert_eq!(table.description("UI8").unwrap(), "8-bit unsigned integer");
        assert_eq!(table.description("TFL_Quint8").unwrap(), "TFLite quint8 type");
    }

    #[test]
    fn test_unknown_code_is_fatal() {
        let table = TypeTable::default();
        let err = table.description("F16").expect_err("F16 is not in the table");
        assert!(matches!(err, Error::UnknownTypeCode(code) if code == "F16"));
    }

    #[test]
    fn test_codes_enumerates_all_nine() {
        let table = TypeTable::default();
        assert_eq!(table.codes().count(), 9);
    }
}
