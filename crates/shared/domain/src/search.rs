//! User search filter.

use serde::{Deserialize, Serialize};

/// Query sent when searching users by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UserSearchQuery {
    /// Name to search for
    pub name: String,
}

impl UserSearchQuery {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl From<&str> for UserSearchQuery {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for UserSearchQuery {
    fn from(name: String) -> Self {
        Self { name }
    }
}
