//! JSON codec for the user contracts.
//!
//! Decoding is schema-level only: required keys must be present with the right
//! JSON type. No business validation happens here.

use domain::{Contract, PasswordChangeRequest, Shape, User, UserProfileUpdate, UserSearchQuery};
use serde::de::{Error as _, Unexpected};
use serde_json::Value;

use crate::error::{AppError, AppResult};

/// Decode a JSON document into a contract.
pub fn decode<T: Contract>(input: &str) -> AppResult<T> {
    let value: Value = serde_json::from_str(input).map_err(|e| decode_failed(T::SHAPE, e))?;
    decode_value(value)
}

/// Decode an already parsed JSON value into a contract.
///
/// Only JSON objects are accepted; serde would otherwise also take an array
/// of the fields in declaration order.
pub fn decode_value<T: Contract>(value: Value) -> AppResult<T> {
    ensure_object(&value)
        .and_then(|_| serde_json::from_value(value))
        .map(|value| {
            tracing::debug!(shape = %T::SHAPE, "Decoded document");
            value
        })
        .map_err(|e| decode_failed(T::SHAPE, e))
}

fn ensure_object(value: &Value) -> serde_json::Result<()> {
    let unexpected = match value {
        Value::Object(_) => return Ok(()),
        Value::Null => Unexpected::Unit,
        Value::Bool(b) => Unexpected::Bool(*b),
        Value::Number(_) => Unexpected::Other("number"),
        Value::String(s) => Unexpected::Str(s),
        Value::Array(_) => Unexpected::Seq,
    };
    Err(serde_json::Error::invalid_type(unexpected, &"a JSON object"))
}

/// Encode a contract as JSON. Absent optional fields are omitted.
pub fn encode<T: Contract>(value: &T, pretty: bool) -> AppResult<String> {
    let encoded = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };

    let encoded = encoded.map_err(|e| AppError::encode(T::SHAPE, e))?;
    tracing::debug!(shape = %T::SHAPE, bytes = encoded.len(), "Encoded document");
    Ok(encoded)
}

/// Decode `input` as `shape` and re-encode it canonically.
pub fn normalize(shape: Shape, input: &str, pretty: bool) -> AppResult<String> {
    match shape {
        Shape::User => roundtrip::<User>(input, pretty),
        Shape::UserProfileUpdate => roundtrip::<UserProfileUpdate>(input, pretty),
        Shape::PasswordChangeRequest => roundtrip::<PasswordChangeRequest>(input, pretty),
        Shape::UserSearchQuery => roundtrip::<UserSearchQuery>(input, pretty),
    }
}

fn roundtrip<T: Contract>(input: &str, pretty: bool) -> AppResult<String> {
    let value: T = decode(input)?;
    encode(&value, pretty)
}

fn decode_failed(shape: Shape, source: serde_json::Error) -> AppError {
    tracing::warn!(%shape, error = %source, "Rejected document");
    AppError::decode(shape, source)
}
