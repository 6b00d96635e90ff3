//! Backend location for the browser build.
//!
//! The base URL is baked in at compile time from `RAGMINI_API_BASE`, the same
//! way a bundler inlines public env vars. An unset or invalid value falls back
//! to [`wire::DEFAULT_API_BASE`].

#[cfg(test)]
#[path = "api_config_test.rs"]
mod api_config_test;

use wire::ApiConfig;

/// Build-time env var naming the backend base URL.
pub const API_BASE_ENV: &str = "RAGMINI_API_BASE";

/// Backend config compiled into this build.
pub fn api_config() -> ApiConfig {
    resolve_api_config(option_env!("RAGMINI_API_BASE"))
}

fn resolve_api_config(raw: Option<&str>) -> ApiConfig {
    match raw.map(ApiConfig::new) {
        Some(Ok(config)) => config,
        Some(Err(_)) | None => ApiConfig::default(),
    }
}
