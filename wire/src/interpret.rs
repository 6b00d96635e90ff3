//! Turn a raw `(status, body)` pair into a typed payload or [`ApiError`].

#[cfg(test)]
#[path = "interpret_test.rs"]
mod tests;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ApiError;
use crate::types::{AskResponse, UploadResponse};

/// Decode a JSON success body, or classify a failure status.
///
/// # Errors
///
/// Returns [`ApiError::Status`] for non-2xx statuses (with any backend
/// `detail`) and [`ApiError::Decode`] when a success body has the wrong shape.
pub fn interpret_json<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ApiError> {
    check_status(status, body)?;
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Interpret a `POST /ask` response.
///
/// # Errors
///
/// See [`interpret_json`].
pub fn interpret_ask(status: u16, body: &str) -> Result<AskResponse, ApiError> {
    interpret_json(status, body)
}

/// Interpret a `POST /upload` response.
///
/// An empty success body is accepted; some backends only signal success
/// through the status code.
///
/// # Errors
///
/// See [`interpret_json`].
pub fn interpret_upload(status: u16, body: &str) -> Result<UploadResponse, ApiError> {
    check_status(status, body)?;
    if body.trim().is_empty() {
        return Ok(UploadResponse::default());
    }
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

fn check_status(status: u16, body: &str) -> Result<(), ApiError> {
    if (200..300).contains(&status) {
        return Ok(());
    }
    Err(ApiError::Status { status, detail: extract_detail(body) })
}

/// Pull a human-readable `detail` out of an error body.
///
/// Accepts `{"detail": "..."}` and the validation shape
/// `{"detail": [{"msg": "..."}, ...]}`, where the first `msg` wins.
#[must_use]
pub fn extract_detail(body: &str) -> Option<String> {
    let Ok(value) = serde_json::from_str::<Value>(body) else {
        return None;
    };
    let detail = match value.get("detail")? {
        Value::String(text) => text.trim().to_owned(),
        Value::Array(items) => items.iter().find_map(|item| item.get("msg")?.as_str())?.trim().to_owned(),
        _ => return None,
    };
    if detail.is_empty() { None } else { Some(detail) }
}
