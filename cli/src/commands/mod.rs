//! Commands module - CLI command implementations.
//!
//! Each command returns the text to print so it can be tested without
//! spawning a process.

pub mod check;
pub mod schema;
pub mod shapes;
