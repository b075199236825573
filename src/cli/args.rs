//! CLI argument types - Cli, Command, and per-command argument structs

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Clasificar: Operator Quantization Coverage Spec Generator
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "clasificar")]
#[command(author = "PAIML")]
#[command(version)]
#[command(about = "Generates quantization coverage lookup tables from an operator registry")]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Generate coverage lookup tables from an operator registry
    Generate(GenerateArgs),

    /// Validate a registry by running classification without emitting
    Validate(ValidateArgs),

    /// Display per-category membership counts for a registry
    Info(InfoArgs),
}

/// Arguments for the generate command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct GenerateArgs {
    /// Path to operator registry file (yaml, yml, or json)
    #[arg(value_name = "REGISTRY")]
    pub registry: PathBuf,

    /// Output path for the generated tables (stdout when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the validate command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct ValidateArgs {
    /// Path to operator registry file
    #[arg(value_name = "REGISTRY")]
    pub registry: PathBuf,
}

/// Arguments for the info command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct InfoArgs {
    /// Path to operator registry file
    #[arg(value_name = "REGISTRY")]
    pub registry: PathBuf,
}
