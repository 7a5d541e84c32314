//! Catalogue of the contracts and their wire fields.

use std::fmt;
use std::str::FromStr;

use serde::{de::DeserializeOwned, Serialize};

use crate::constants::*;
use crate::error::DomainError;
use crate::{PasswordChangeRequest, User, UserProfileUpdate, UserSearchQuery};

/// One wire field of a contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// camelCase key as it appears in JSON
    pub name: &'static str,
    pub required: bool,
}

const fn required(name: &'static str) -> FieldSpec {
    FieldSpec {
        name,
        required: true,
    }
}

const fn optional(name: &'static str) -> FieldSpec {
    FieldSpec {
        name,
        required: false,
    }
}

const USER_FIELDS: &[FieldSpec] = &[
    required(FIELD_ID),
    required(FIELD_NAME),
    optional(FIELD_BIO),
    required(FIELD_EMAIL),
    required(FIELD_AVATAR_URL),
    optional(FIELD_LOCATION),
    optional(FIELD_NICKNAME),
];

const USER_PROFILE_UPDATE_FIELDS: &[FieldSpec] = &[
    optional(FIELD_NAME),
    optional(FIELD_BIO),
    optional(FIELD_EMAIL),
    optional(FIELD_LOCATION),
    optional(FIELD_NICKNAME),
];

const PASSWORD_CHANGE_REQUEST_FIELDS: &[FieldSpec] = &[
    required(FIELD_OLD_PASSWORD),
    required(FIELD_NEW_PASSWORD),
    required(FIELD_CONFIRM_PASSWORD),
];

const USER_SEARCH_QUERY_FIELDS: &[FieldSpec] = &[required(FIELD_NAME)];

/// The contracts exchanged with the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    User,
    UserProfileUpdate,
    PasswordChangeRequest,
    UserSearchQuery,
}

impl Shape {
    /// Every shape, in declaration order
    pub const ALL: [Shape; 4] = [
        Shape::User,
        Shape::UserProfileUpdate,
        Shape::PasswordChangeRequest,
        Shape::UserSearchQuery,
    ];

    /// Schema name (matches the Rust type name)
    pub fn name(&self) -> &'static str {
        match self {
            Shape::User => SHAPE_USER,
            Shape::UserProfileUpdate => SHAPE_USER_PROFILE_UPDATE,
            Shape::PasswordChangeRequest => SHAPE_PASSWORD_CHANGE_REQUEST,
            Shape::UserSearchQuery => SHAPE_USER_SEARCH_QUERY,
        }
    }

    /// Short name accepted on the command line
    pub fn alias(&self) -> &'static str {
        match self {
            Shape::User => ALIAS_USER,
            Shape::UserProfileUpdate => ALIAS_PROFILE_UPDATE,
            Shape::PasswordChangeRequest => ALIAS_PASSWORD_CHANGE,
            Shape::UserSearchQuery => ALIAS_SEARCH,
        }
    }

    /// Wire fields in declaration order
    pub fn fields(&self) -> &'static [FieldSpec] {
        match self {
            Shape::User => USER_FIELDS,
            Shape::UserProfileUpdate => USER_PROFILE_UPDATE_FIELDS,
            Shape::PasswordChangeRequest => PASSWORD_CHANGE_REQUEST_FIELDS,
            Shape::UserSearchQuery => USER_SEARCH_QUERY_FIELDS,
        }
    }

    pub fn required_fields(&self) -> impl Iterator<Item = &'static str> {
        self.fields().iter().filter(|f| f.required).map(|f| f.name)
    }

    pub fn optional_fields(&self) -> impl Iterator<Item = &'static str> {
        self.fields().iter().filter(|f| !f.required).map(|f| f.name)
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Shape {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Shape::ALL
            .into_iter()
            .find(|shape| {
                shape.name().eq_ignore_ascii_case(s) || shape.alias().eq_ignore_ascii_case(s)
            })
            .ok_or_else(|| DomainError::unknown_shape(s))
    }
}

/// A record type that crosses the client/service boundary as JSON.
pub trait Contract: Serialize + DeserializeOwned {
    const SHAPE: Shape;
}

impl Contract for User {
    const SHAPE: Shape = Shape::User;
}

impl Contract for UserProfileUpdate {
    const SHAPE: Shape = Shape::UserProfileUpdate;
}

impl Contract for PasswordChangeRequest {
    const SHAPE: Shape = Shape::PasswordChangeRequest;
}

impl Contract for UserSearchQuery {
    const SHAPE: Shape = Shape::UserSearchQuery;
}
