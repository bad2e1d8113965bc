//! Error types for PromptVault
//!
//! Centralized error handling using thiserror.

use thiserror::Error;

/// All error types that can occur while fetching a prompt
#[derive(Debug, Error)]
pub enum PromptVaultError {
    /// Fetch attempted before a base URL and API key were configured
    #[error("PromptVault not configured. Call promptvault::configure() first.")]
    NotConfigured,

    /// Server rejected the API key (HTTP 401)
    #[error("Invalid API key")]
    InvalidCredentials,

    /// Prompt does not exist in the project (HTTP 404)
    #[error("Prompt '{slug}' not found in project '{namespace}'")]
    NotFound { slug: String, namespace: String },

    /// Key is valid but may not read this project (HTTP 403)
    #[error("Access denied to project '{namespace}'")]
    AccessDenied { namespace: String },

    /// Any other non-success status
    #[error("API error: {status} - {body}")]
    Api { status: u16, body: String },

    /// DNS, connect, timeout or other transport failure
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// 200 response whose body has no string `content` field
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl PromptVaultError {
    /// True for 401 and 403, where the caller should re-authenticate or pick another key
    pub fn is_auth_failure(&self) -> bool {
        matches!(
            self,
            PromptVaultError::InvalidCredentials | PromptVaultError::AccessDenied { .. }
        )
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, PromptVaultError::NotFound { .. })
    }

    pub fn is_network(&self) -> bool {
        matches!(self, PromptVaultError::Network(_))
    }

    /// HTTP status this error was mapped from, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            PromptVaultError::InvalidCredentials => Some(401),
            PromptVaultError::AccessDenied { .. } => Some(403),
            PromptVaultError::NotFound { .. } => Some(404),
            PromptVaultError::Api { status, .. } => Some(*status),
            PromptVaultError::NotConfigured
            | PromptVaultError::Network(_)
            | PromptVaultError::InvalidResponse(_) => None,
        }
    }
}

/// Result type alias for PromptVault operations
pub type Result<T> = std::result::Result<T, PromptVaultError>;
