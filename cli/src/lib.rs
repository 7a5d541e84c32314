//! User Contracts command-line tool.
//!
//! # CLI Usage
//!
//! ```bash
//! # Normalize a user document
//! user-contracts check user user.json
//!
//! # Print the schema of the password change payload
//! user-contracts --pretty schema password-change
//!
//! # List every shape and its fields
//! user-contracts shapes
//! ```

pub mod args;
pub mod commands;

pub use args::{Cli, Commands};

use common::{AppResult, ToolConfig};

/// Dispatch a parsed command and return its output
pub fn run(cli: Cli, config: &ToolConfig) -> AppResult<String> {
    let pretty = cli.pretty || config.pretty;

    match cli.command {
        Commands::Check(args) => commands::check::execute(args, pretty),
        Commands::Schema(args) => commands::schema::execute(args, pretty),
        Commands::Shapes => Ok(commands::shapes::execute()),
    }
}
