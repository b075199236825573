//! Validate command implementation

use crate::classify::TypeTable;
use crate::cli::logging::log;
use crate::cli::{LogLevel, ValidateArgs};
use crate::emit::CoverageSpec;
use crate::registry::load_registry;

/// Load a registry and run every classification pass, discarding the result.
///
/// Surfaces the same fatal configuration errors a generate run would hit
/// (unreadable file, duplicate names, tagged operators without arguments)
/// without writing anything.
pub fn run_validate(args: ValidateArgs, level: LogLevel) -> Result<(), String> {
    let registry =
        load_registry(&args.registry).map_err(|e| format!("Registry error: {e}"))?;

    CoverageSpec::generate(&registry, &TypeTable::default())
        .map_err(|e| format!("Classification error: {e}"))?;

    log(
        level,
        LogLevel::Normal,
        &format!(
            "Registry OK: {} operators, all classification passes completed",
            registry.len()
        ),
    );

    Ok(())
}
