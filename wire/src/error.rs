//! Typed failure for every backend call.

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;

/// Error returned by backend requests and response interpretation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced an HTTP response (connection refused, CORS, DNS).
    #[error("{0}")]
    Transport(String),

    /// The backend answered with a non-success status.
    #[error("backend returned status {status}")]
    Status { status: u16, detail: Option<String> },

    /// A success body could not be decoded into the expected shape.
    #[error("unexpected response body: {0}")]
    Decode(String),

    /// The request was rejected locally before being sent.
    #[error("{0}")]
    Validation(String),
}

impl ApiError {
    /// Backend-supplied `detail`, if the failure carried one.
    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Status { detail: Some(detail), .. } if !detail.is_empty() => Some(detail),
            _ => None,
        }
    }

    /// Backend detail, else `fallback`.
    ///
    /// Used where only the backend's own explanation is worth showing.
    #[must_use]
    pub fn detail_or(&self, fallback: &str) -> String {
        self.detail().unwrap_or(fallback).to_owned()
    }

    /// Backend detail, else this error's own message, else `fallback`.
    #[must_use]
    pub fn describe_or(&self, fallback: &str) -> String {
        if let Some(detail) = self.detail() {
            return detail.to_owned();
        }
        let message = self.to_string();
        if message.trim().is_empty() { fallback.to_owned() } else { message }
    }
}
