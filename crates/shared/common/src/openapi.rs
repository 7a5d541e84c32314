//! OpenAPI documentation for the user contracts.
//!
//! Only component schemas are published; endpoints belong to the service.

use domain::{PasswordChangeRequest, Shape, User, UserProfileUpdate, UserSearchQuery};
use utoipa::OpenApi;

use crate::error::{AppError, AppResult};

/// OpenAPI document listing every contract as a component schema
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User Contracts",
        version = "0.1.0",
        description = "Data shapes exchanged between the client and the user service",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    components(schemas(User, UserProfileUpdate, PasswordChangeRequest, UserSearchQuery))
)]
pub struct ContractsDoc;

/// Render the whole document, or a single component schema when `shape` is set.
pub fn schema_json(shape: Option<Shape>, pretty: bool) -> AppResult<String> {
    let doc = ContractsDoc::openapi();

    let rendered = match shape {
        None => render(&doc, pretty),
        Some(shape) => {
            let schema = doc
                .components
                .as_ref()
                .and_then(|components| components.schemas.get(shape.name()))
                .ok_or_else(|| {
                    AppError::internal(format!("schema for {} missing from document", shape))
                })?;
            render(schema, pretty)
        }
    };

    rendered.map_err(|e| AppError::internal(format!("schema rendering failed: {}", e)))
}

fn render<T: serde::Serialize>(value: &T, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
}
