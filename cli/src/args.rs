//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// User Contracts - inspect and normalize the user data shapes
#[derive(Parser, Debug)]
#[command(name = "user-contracts")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Pretty-print JSON output
    #[arg(short, long, global = true)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Decode a JSON document as a shape and print its canonical encoding
    Check(CheckArgs),

    /// Print the OpenAPI schema of one shape, or of every shape
    Schema(SchemaArgs),

    /// List the shapes with their required and optional fields
    Shapes,
}

/// Arguments for the check command
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Shape name (e.g. "user", "profile-update", "PasswordChangeRequest")
    pub shape: String,

    /// JSON file to read (stdin when omitted)
    pub path: Option<PathBuf>,
}

/// Arguments for the schema command
#[derive(Parser, Debug)]
pub struct SchemaArgs {
    /// Shape name; the whole document when omitted
    pub shape: Option<String>,
}
