//! Errors of the storefront layer (directory access, session, views).

use thiserror::Error;

use boutique_core::DomainError;

pub const TIMEOUT_NOTICE: &str = "Request timed out. Please try again.";
pub const OFFLINE_NOTICE: &str = "Backend server is offline. Please ensure the server is running.";

/// Failure talking to the product directory.
///
/// Every variant is terminal for the action that produced it; nothing retries.
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("request timed out")]
    Timeout,
    /// No response was received (connection refused, DNS, TLS, ...).
    #[error("directory unreachable: {0}")]
    Offline(String),
    #[error("API error ({status}): {body}")]
    Api {
        status: u16,
        /// `message` field of a JSON error body, when present.
        message: Option<String>,
        body: String,
    },
    #[error("parse error: {0}")]
    Parse(String),
    #[error("invalid request: {0}")]
    Request(String),
    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl DirectoryError {
    pub fn api(status: u16, body: String) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(String::from));
        DirectoryError::Api {
            status,
            message,
            body,
        }
    }

    /// Text shown to the user when `action` (e.g. "delete product") fails.
    pub fn notice(&self, action: &str) -> String {
        match self {
            DirectoryError::Timeout => TIMEOUT_NOTICE.to_string(),
            DirectoryError::Offline(_) => OFFLINE_NOTICE.to_string(),
            DirectoryError::Domain(e) => e.message(),
            _ => format!("Failed to {action}. Please try again."),
        }
    }
}

impl From<reqwest::Error> for DirectoryError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            DirectoryError::Timeout
        } else if e.is_decode() {
            DirectoryError::Parse(e.to_string())
        } else if e.is_builder() {
            DirectoryError::Request(e.to_string())
        } else {
            DirectoryError::Offline(e.to_string())
        }
    }
}

/// Failure reading or writing the persisted session token.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("session store I/O failed for {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("session file is corrupt: {0}")]
    Corrupt(String),
}

/// Outcome of a view action that did not complete.
#[derive(Debug, Error)]
pub enum ViewError {
    /// The view needs an authenticated session; the host should show login.
    #[error("login required")]
    LoginRequired,
    #[error(transparent)]
    Invalid(#[from] DomainError),
    #[error(transparent)]
    Directory(#[from] DirectoryError),
    #[error(transparent)]
    Session(#[from] SessionError),
}

impl ViewError {
    /// Text shown to the user for a failed `action`.
    pub fn notice(&self, action: &str) -> String {
        match self {
            ViewError::LoginRequired => "Please log in to continue.".to_string(),
            ViewError::Invalid(e) => e.message(),
            ViewError::Directory(e) => e.notice(action),
            ViewError::Session(e) => e.to_string(),
        }
    }
}
