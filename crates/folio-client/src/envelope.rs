//! Response envelope unwrapping.
//!
//! The template API wraps payloads as `{"success": true, "data": ...}`.
//! Older deployments return the payload bare. Every response goes through
//! [`unwrap_envelope`] exactly once so call sites never guess the shape.

use serde_json::Value;

use crate::error::{Error, Result};

/// Extract the payload from a response body.
///
/// - An object with a `data` key is an envelope; `data` is returned.
/// - An object whose `success` is explicitly `false` is a failure, with or
///   without `data`.
/// - Anything else is accepted as a bare legacy payload.
pub fn unwrap_envelope(body: Value) -> Result<Value> {
    let Value::Object(mut map) = body else {
        return Ok(body);
    };

    if map.get("success") == Some(&Value::Bool(false)) {
        let message = map
            .get("message")
            .or_else(|| map.get("error"))
            .and_then(Value::as_str)
            .unwrap_or("backend reported success=false");
        return Err(Error::envelope(message));
    }

    match map.remove("data") {
        Some(data) => Ok(data),
        None => Ok(Value::Object(map)),
    }
}
