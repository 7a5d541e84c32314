//! Common utilities shared by the contract tooling.
//!
//! This crate provides:
//! - The JSON codec for the user contracts
//! - Unified error handling
//! - Configuration structures
//! - The OpenAPI schema document

pub mod codec;
pub mod config;
pub mod error;
pub mod openapi;

pub use codec::{decode, decode_value, encode, normalize};
pub use config::ToolConfig;
pub use error::{AppError, AppResult};
pub use openapi::{schema_json, ContractsDoc};
