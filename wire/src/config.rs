//! Backend location injected into every front-end.

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

use crate::error::ApiError;

/// Base URL used when nothing else is configured.
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// Where the RAG backend lives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Validate and normalize a base URL (surrounding whitespace and trailing
    /// slashes are dropped).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] if the URL is empty or not `http(s)`.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let base_url = base_url.trim().trim_end_matches('/');
        if base_url.is_empty() {
            return Err(ApiError::Validation("backend base URL is empty".to_owned()));
        }
        let has_scheme = base_url
            .strip_prefix("http://")
            .or_else(|| base_url.strip_prefix("https://"))
            .is_some_and(|rest| !rest.is_empty());
        if !has_scheme {
            return Err(ApiError::Validation(format!(
                "backend base URL must start with http:// or https://: {base_url}"
            )));
        }
        Ok(Self { base_url: base_url.to_owned() })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an endpoint path such as [`crate::ASK_PATH`].
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_API_BASE.to_owned() }
    }
}
