//! Storefront configuration (environment-driven).

use std::path::PathBuf;
use std::time::Duration;

pub const API_URL_ENV: &str = "BOUTIQUE_API_URL";
pub const TIMEOUT_ENV: &str = "BOUTIQUE_REQUEST_TIMEOUT_SECS";
pub const SESSION_FILE_ENV: &str = "BOUTIQUE_SESSION_FILE";

pub const DEFAULT_API_URL: &str = "https://pooja-backend.onrender.com/api";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Runtime configuration, read once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    /// Base URL of the product directory, without a trailing slash.
    pub api_url: String,
    /// Fixed per-request timeout.
    pub request_timeout: Duration,
    /// Where the session token is persisted.
    pub session_file: PathBuf,
}

impl StorefrontConfig {
    pub fn new(api_url: impl Into<String>, session_file: impl Into<PathBuf>) -> Self {
        Self {
            api_url: normalize_url(api_url.into()),
            request_timeout: DEFAULT_TIMEOUT,
            session_file: session_file.into(),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Build the configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let api_url = lookup(API_URL_ENV)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let request_timeout = match lookup(TIMEOUT_ENV) {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    tracing::warn!(
                        "{TIMEOUT_ENV}={raw:?} is not a positive integer; using default"
                    );
                    DEFAULT_TIMEOUT
                }
            },
            None => DEFAULT_TIMEOUT,
        };

        let session_file = lookup(SESSION_FILE_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(default_session_file);

        Self::new(api_url, session_file).with_timeout(request_timeout)
    }
}

fn normalize_url(url: String) -> String {
    url.trim().trim_end_matches('/').to_string()
}

/// `<config dir>/boutique/session.json`, falling back to the working directory
/// when the platform has no config directory.
pub fn default_session_file() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("boutique")
        .join("session.json")
}
