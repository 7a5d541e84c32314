//! Codec integration tests.
//!
//! Exercise the wire contracts end to end through the public codec API.

use std::collections::BTreeSet;

use serde_json::{json, Value};

use common::{decode, decode_value, encode, normalize, AppError};
use domain::{PasswordChangeRequest, Shape, User, UserProfileUpdate, UserSearchQuery};

fn keys(value: &Value) -> BTreeSet<String> {
    value
        .as_object()
        .map(|o| o.keys().cloned().collect())
        .unwrap_or_default()
}

// =============================================================================
// User
// =============================================================================

#[test]
fn test_user_minimal_document() {
    let input = r#"{"id":1,"name":"Alice","email":"a@example.com","avatarUrl":"http://x/a.png"}"#;

    let user: User = decode(input).unwrap();
    assert_eq!(user.id, 1);
    assert_eq!(user.name, "Alice");
    assert!(user.bio.is_none());
    assert!(user.location.is_none());
    assert!(user.nickname.is_none());

    let reencoded: Value = serde_json::from_str(&encode(&user, false).unwrap()).unwrap();
    let original: Value = serde_json::from_str(input).unwrap();
    assert_eq!(keys(&reencoded), keys(&original));
    assert_eq!(reencoded, original);
}

#[test]
fn test_user_optional_subsets_roundtrip() {
    let optionals = [
        ("bio", "Painter"),
        ("location", "Porto"),
        ("nickname", "ali"),
    ];

    // Every subset of the optional fields
    for mask in 0..(1 << optionals.len()) {
        let mut doc = json!({
            "id": 9,
            "name": "Alice",
            "email": "a@example.com",
            "avatarUrl": "http://x/a.png"
        });
        for (i, (key, value)) in optionals.iter().enumerate() {
            if mask & (1 << i) != 0 {
                doc[*key] = json!(value);
            }
        }

        let user: User = decode_value(doc.clone()).unwrap();
        let reencoded: Value = serde_json::from_str(&encode(&user, false).unwrap()).unwrap();
        assert_eq!(reencoded, doc, "mask {mask}");
    }
}

#[test]
fn test_user_missing_required_field() {
    let err = decode::<User>(r#"{"id":1,"name":"Alice","email":"a@example.com"}"#).unwrap_err();

    assert!(err.is_missing_field());
    assert!(err.user_message().contains("avatarUrl"));
}

// =============================================================================
// UserProfileUpdate
// =============================================================================

#[test]
fn test_empty_profile_update() {
    let update: UserProfileUpdate = decode("{}").unwrap();

    assert!(update.is_empty());
    assert_eq!(encode(&update, false).unwrap(), "{}");
}

#[test]
fn test_profile_update_explicit_empty_string_survives() {
    assert_eq!(
        normalize(Shape::UserProfileUpdate, r#"{"location":""}"#, false).unwrap(),
        r#"{"location":""}"#
    );
}

// =============================================================================
// PasswordChangeRequest
// =============================================================================

#[test]
fn test_password_change_requires_every_field() {
    let full = json!({
        "oldPassword": "old",
        "newPassword": "new",
        "confirmPassword": "new"
    });
    assert!(decode_value::<PasswordChangeRequest>(full.clone()).is_ok());

    for key in ["oldPassword", "newPassword", "confirmPassword"] {
        let mut doc = full.clone();
        doc.as_object_mut().unwrap().remove(key);

        let err = decode_value::<PasswordChangeRequest>(doc).unwrap_err();
        assert!(
            matches!(
                err,
                AppError::Decode {
                    shape: Shape::PasswordChangeRequest,
                    ..
                }
            ),
            "{key}"
        );
        assert!(err.is_missing_field(), "{key}");
    }
}

#[test]
fn test_password_change_null_field_rejected() {
    let err = decode::<PasswordChangeRequest>(
        r#"{"oldPassword":"old","newPassword":null,"confirmPassword":"new"}"#,
    )
    .unwrap_err();

    assert_eq!(err.code(), "DECODE_ERROR");
}

// =============================================================================
// UserSearchQuery
// =============================================================================

#[test]
fn test_search_query_requires_name() {
    let err = decode::<UserSearchQuery>("{}").unwrap_err();

    assert!(err.is_missing_field());
    assert_eq!(err.exit_code(), 65);
}

#[test]
fn test_search_query_normalize() {
    assert_eq!(
        normalize(Shape::UserSearchQuery, r#"{ "name" : "Ali" }"#, false).unwrap(),
        r#"{"name":"Ali"}"#
    );
}

// =============================================================================
// Non-object input
// =============================================================================

#[test]
fn test_non_object_documents_rejected() {
    for shape in Shape::ALL {
        for input in ["[]", "null", "42", "\"user\""] {
            let err = normalize(shape, input, false).unwrap_err();
            assert_eq!(err.code(), "DECODE_ERROR", "{shape} {input}");
        }
    }
}

#[test]
fn test_positional_arrays_rejected() {
    let cases = [
        (Shape::PasswordChangeRequest, r#"["a","b","c"]"#),
        (
            Shape::User,
            r#"[1,"Alice",null,"a@x","http://x/a.png",null,null]"#,
        ),
        (Shape::UserProfileUpdate, r#"["n","b","e","l","k"]"#),
        (Shape::UserSearchQuery, r#"["ali"]"#),
    ];

    for (shape, input) in cases {
        let err = normalize(shape, input, false).unwrap_err();
        assert!(
            matches!(err, AppError::Decode { shape: s, .. } if s == shape),
            "{shape} {input}"
        );
        assert!(!err.is_missing_field(), "{shape} {input}");
    }
}

#[test]
fn test_decode_value_rejects_array() {
    let err = decode_value::<UserSearchQuery>(json!(["ali"])).unwrap_err();
    assert_eq!(err.exit_code(), 65);
}
