//! Generate command implementation

use crate::classify::TypeTable;
use crate::cli::logging::log;
use crate::cli::{GenerateArgs, LogLevel};
use crate::emit::CoverageSpec;
use crate::registry::load_registry;
use std::io::Write;

pub fn run_generate(args: GenerateArgs, level: LogLevel) -> Result<(), String> {
    let registry =
        load_registry(&args.registry).map_err(|e| format!("Registry error: {e}"))?;

    log(
        level,
        LogLevel::Verbose,
        &format!(
            "Loaded {} operators from {}",
            registry.len(),
            args.registry.display()
        ),
    );

    // Classify everything before opening the output; a failed run must not
    // leave a partial artifact behind.
    let spec = CoverageSpec::generate(&registry, &TypeTable::default())
        .map_err(|e| format!("Classification error: {e}"))?;

    let mut rendered = Vec::new();
    spec.write_to(&mut rendered)
        .map_err(|e| format!("Emission error: {e}"))?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, &rendered)
                .map_err(|e| format!("Failed to write output: {e}"))?;
            log(
                level,
                LogLevel::Normal,
                &format!("Wrote coverage tables to {}", path.display()),
            );
        }
        None => {
            std::io::stdout()
                .write_all(&rendered)
                .map_err(|e| format!("Failed to write output: {e}"))?;
        }
    }

    Ok(())
}
