//! Domain layer - User contracts shared between the client and the service.
//!
//! Plain record shapes with no behavior: which fields exist on the wire and
//! which of them are optional. Validation, persistence and transport live in
//! whatever consumes these types.

pub mod constants;
pub mod error;
pub mod password;
pub mod search;
pub mod shape;
pub mod user;

pub use error::{DomainError, DomainResult};
pub use password::PasswordChangeRequest;
pub use search::UserSearchQuery;
pub use shape::{Contract, FieldSpec, Shape};
pub use user::{User, UserProfileUpdate};
