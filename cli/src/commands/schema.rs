//! Schema command - print OpenAPI component schemas.

use common::{schema_json, AppResult};
use domain::Shape;

use crate::args::SchemaArgs;

/// Execute the schema command
pub fn execute(args: SchemaArgs, pretty: bool) -> AppResult<String> {
    let shape = args.shape.as_deref().map(str::parse::<Shape>).transpose()?;
    match shape {
        Some(shape) => tracing::info!(%shape, "Rendering schema"),
        None => tracing::info!("Rendering schema document"),
    }
    schema_json(shape, pretty)
}
