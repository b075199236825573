//! CLI module for clasificar
//!
//! Command-line surface and command handlers. The classification core never
//! reaches in here; this is the thin I/O shell around it.

mod args;
mod commands;
mod logging;

pub use args::{Cli, Command, GenerateArgs, InfoArgs, ValidateArgs};
pub use commands::run_command;
pub use logging::LogLevel;
