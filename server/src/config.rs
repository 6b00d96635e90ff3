//! Host configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BIND_HOST: &str = "0.0.0.0";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A variable was set but could not be parsed.
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub host: String,
    pub port: u16,
    /// Overrides the Leptos site root holding `pkg/`.
    pub site_root: Option<PathBuf>,
}

impl HostConfig {
    /// Build host config from the process environment.
    ///
    /// Optional:
    /// - `HOST`: default `0.0.0.0`
    /// - `PORT`: default 3000
    /// - `RAGMINI_SITE_ROOT`: directory containing the compiled `pkg/` bundle
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when `PORT` is not a valid port.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`HostConfig::from_env`], reading variables through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when `PORT` is not a valid port.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = non_blank(lookup("HOST")).unwrap_or_else(|| DEFAULT_BIND_HOST.to_owned());
        let port = match non_blank(lookup("PORT")) {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::Invalid { var: "PORT", value: raw })?,
            None => DEFAULT_PORT,
        };
        let site_root = non_blank(lookup("RAGMINI_SITE_ROOT")).map(PathBuf::from);
        Ok(Self { host, port, site_root })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for HostConfig {
    fn default() -> Self {
        Self { host: DEFAULT_BIND_HOST.to_owned(), port: DEFAULT_PORT, site_root: None }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}
