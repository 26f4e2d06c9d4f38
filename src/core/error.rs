//! Custom error types for verishot
//!
//! Provides a unified error handling system across all modules.

use thiserror::Error;

/// Main error type for verishot operations
#[derive(Error, Debug)]
pub enum VerishotError {
    /// Browser launch or protocol errors
    #[error("Browser error: {0}")]
    Browser(String),

    /// An expected element was not found in the page
    #[error("Element not found: {0}")]
    ElementNotFound(String),

    /// An expected element never became visible within the wait window
    #[error("Timed out after {ms}ms waiting for {what}")]
    Timeout { what: String, ms: u64 },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Chrome DevTools protocol errors
    #[error("CDP error: {0}")]
    Cdp(#[from] chromiumoxide::error::CdpError),

    /// JSON parsing errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience Result type for verishot operations
pub type Result<T> = std::result::Result<T, VerishotError>;

impl VerishotError {
    /// Create a browser error
    pub fn browser(msg: impl Into<String>) -> Self {
        Self::Browser(msg.into())
    }

    /// Create a config error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a wait-timeout error
    pub fn timeout(what: impl Into<String>, ms: u64) -> Self {
        Self::Timeout {
            what: what.into(),
            ms,
        }
    }
}
