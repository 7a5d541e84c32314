//! Contract-level constants.
//!
//! Schema names and wire field names shared by the shapes, the codec and the
//! command-line tool.

// =============================================================================
// Schema Names
// =============================================================================

/// Schema name of the user record
pub const SHAPE_USER: &str = "User";

/// Schema name of the partial profile patch
pub const SHAPE_USER_PROFILE_UPDATE: &str = "UserProfileUpdate";

/// Schema name of the password change payload
pub const SHAPE_PASSWORD_CHANGE_REQUEST: &str = "PasswordChangeRequest";

/// Schema name of the user search filter
pub const SHAPE_USER_SEARCH_QUERY: &str = "UserSearchQuery";

// =============================================================================
// Shape Aliases (command line)
// =============================================================================

pub const ALIAS_USER: &str = "user";
pub const ALIAS_PROFILE_UPDATE: &str = "profile-update";
pub const ALIAS_PASSWORD_CHANGE: &str = "password-change";
pub const ALIAS_SEARCH: &str = "search";

// =============================================================================
// Wire Field Names
// =============================================================================

pub const FIELD_ID: &str = "id";
pub const FIELD_NAME: &str = "name";
pub const FIELD_BIO: &str = "bio";
pub const FIELD_EMAIL: &str = "email";
pub const FIELD_AVATAR_URL: &str = "avatarUrl";
pub const FIELD_LOCATION: &str = "location";
pub const FIELD_NICKNAME: &str = "nickname";
pub const FIELD_OLD_PASSWORD: &str = "oldPassword";
pub const FIELD_NEW_PASSWORD: &str = "newPassword";
pub const FIELD_CONFIRM_PASSWORD: &str = "confirmPassword";
