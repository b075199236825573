//! Info command implementation

use crate::classify::TypeTable;
use crate::cli::logging::log;
use crate::cli::{InfoArgs, LogLevel};
use crate::emit::{CoverageSpec, SpecCategory};
use crate::registry::load_registry;

pub fn run_info(args: InfoArgs, level: LogLevel) -> Result<(), String> {
    let registry =
        load_registry(&args.registry).map_err(|e| format!("Registry error: {e}"))?;

    let spec = CoverageSpec::generate(&registry, &TypeTable::default())
        .map_err(|e| format!("Classification error: {e}"))?;

    log(level, LogLevel::Normal, "Coverage summary:");
    log(
        level,
        LogLevel::Normal,
        &format!("  Operators: {}", registry.len()),
    );
    for category in SpecCategory::ALL {
        log(
            level,
            LogLevel::Normal,
            &format!(
                "  {}: {}",
                category.label(),
                spec.category(category).len()
            ),
        );
    }

    Ok(())
}
