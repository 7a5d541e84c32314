//! User record and the partial profile patch.

use serde::{Deserialize, Serialize};

/// User profile as exchanged with the service.
///
/// `id` is assigned by the service and assumed unique there; nothing here
/// enforces it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Service-assigned identifier
    #[cfg_attr(feature = "openapi", schema(example = 1))]
    pub id: i64,
    /// Full name
    #[cfg_attr(feature = "openapi", schema(example = "Alice"))]
    pub name: String,
    /// Free-form biography
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    /// Contact email address
    #[cfg_attr(feature = "openapi", schema(example = "a@example.com"))]
    pub email: String,
    /// Absolute URL of the avatar image
    pub avatar_url: String,
    /// Free-form location, e.g. a city
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Display nickname
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
}

impl User {
    /// Create a user with only the required fields set
    pub fn new(
        id: i64,
        name: impl Into<String>,
        email: impl Into<String>,
        avatar_url: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            bio: None,
            email: email.into(),
            avatar_url: avatar_url.into(),
            location: None,
            nickname: None,
        }
    }

    pub fn with_bio(mut self, bio: impl Into<String>) -> Self {
        self.bio = Some(bio.into());
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_nickname(mut self, nickname: impl Into<String>) -> Self {
        self.nickname = Some(nickname.into());
        self
    }
}

/// Partial patch of a user's profile.
///
/// An absent field means "leave unchanged". `Some(String::new())` is an
/// explicit empty value and is sent as `""`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct UserProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
}

impl UserProfileUpdate {
    /// True when no field is present (encodes to `{}`)
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.bio.is_none()
            && self.email.is_none()
            && self.location.is_none()
            && self.nickname.is_none()
    }
}

/// Prefill a profile form from the current user.
impl From<&User> for UserProfileUpdate {
    fn from(user: &User) -> Self {
        Self {
            name: Some(user.name.clone()),
            bio: user.bio.clone(),
            email: Some(user.email.clone()),
            location: user.location.clone(),
            nickname: user.nickname.clone(),
        }
    }
}
