//! HTTP client for the Prompt Manager API
//!
//! One blocking GET per fetch against `{base_url}/api/prompts/{slug}`,
//! authenticated with the `x-api-key` header.

use std::time::Duration;

use log::{debug, warn};
use reqwest::StatusCode;
use reqwest::blocking::Client;
use serde::Deserialize;

use crate::client::source::PromptSource;
use crate::error::{PromptVaultError, Result};

/// Environment variable holding the service base URL
pub const BASE_URL_ENV: &str = "PROMPTVAULT_BASE_URL";

/// Environment variable holding the API key
pub const API_KEY_ENV: &str = "PROMPTVAULT_API_KEY";

/// Fixed per-request timeout
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Header carrying the API key
const API_KEY_HEADER: &str = "x-api-key";

/// Base URL and API key for one service
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub api_key: String,
}

impl ClientConfig {
    /// Create a config, stripping any trailing slash from the base URL
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }

    /// Read PROMPTVAULT_BASE_URL and PROMPTVAULT_API_KEY
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var(BASE_URL_ENV).map_err(|_| PromptVaultError::NotConfigured)?;
        let api_key = std::env::var(API_KEY_ENV).map_err(|_| PromptVaultError::NotConfigured)?;
        Ok(Self::new(base_url, api_key))
    }

    /// Both fields are present
    pub fn is_complete(&self) -> bool {
        !self.base_url.is_empty() && !self.api_key.is_empty()
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

/// A single fetch: (slug, namespace, optional version)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptRequest {
    pub slug: String,
    pub namespace: String,
    pub version: Option<u32>,
}

impl PromptRequest {
    pub fn new(slug: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            namespace: namespace.into(),
            version: None,
        }
    }

    /// Pin a version; zero counts as unset
    pub fn with_version(mut self, version: Option<u32>) -> Self {
        self.version = version.filter(|v| *v != 0);
        self
    }

    /// Target URL without the query string
    pub fn url(&self, base_url: &str) -> String {
        format!("{}/api/prompts/{}", base_url, self.slug)
    }

    /// Query parameters; `version` only appears when pinned
    pub fn query(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("projectSlug", self.namespace.clone())];
        if let Some(version) = self.version {
            params.push(("version", version.to_string()));
        }
        params
    }
}

#[derive(Debug, Deserialize)]
struct PromptBody {
    content: String,
}

/// Blocking Prompt Manager client
#[derive(Clone)]
pub struct PromptClient {
    http: Client,
    config: ClientConfig,
}

impl PromptClient {
    /// Create a client with the fixed 10 second timeout
    pub fn new(config: ClientConfig) -> Result<Self> {
        Self::with_timeout(config, REQUEST_TIMEOUT)
    }

    /// Create a client from PROMPTVAULT_BASE_URL and PROMPTVAULT_API_KEY
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    pub(crate) fn with_timeout(config: ClientConfig, timeout: Duration) -> Result<Self> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self::with_http(http, config))
    }

    pub(crate) fn with_http(http: Client, config: ClientConfig) -> Self {
        Self { http, config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Perform one GET and map the response
    pub fn fetch(&self, request: &PromptRequest) -> Result<String> {
        if !self.config.is_complete() {
            return Err(PromptVaultError::NotConfigured);
        }

        let url = request.url(&self.config.base_url);
        debug!(
            "Fetching prompt '{}' from project '{}' (version: {:?})",
            request.slug, request.namespace, request.version
        );

        let response = self
            .http
            .get(&url)
            .header(API_KEY_HEADER, &self.config.api_key)
            .query(&request.query())
            .send()?;

        let status = response.status();
        let body = response.text()?;
        map_response(status, body, request)
    }
}

impl PromptSource for PromptClient {
    fn get_prompt(&self, slug: &str, namespace: &str, version: Option<u32>) -> Result<String> {
        let request = PromptRequest::new(slug, namespace).with_version(version);
        self.fetch(&request)
    }
}

impl std::fmt::Debug for PromptClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PromptClient")
            .field("config", &self.config)
            .finish()
    }
}

/// Map a status and body to content or a typed failure
fn map_response(status: StatusCode, body: String, request: &PromptRequest) -> Result<String> {
    match status {
        StatusCode::OK => {
            let parsed: PromptBody = serde_json::from_str(&body)
                .map_err(|e| PromptVaultError::InvalidResponse(e.to_string()))?;
            Ok(parsed.content)
        }
        StatusCode::UNAUTHORIZED => {
            warn!("API key rejected");
            Err(PromptVaultError::InvalidCredentials)
        }
        StatusCode::NOT_FOUND => Err(PromptVaultError::NotFound {
            slug: request.slug.clone(),
            namespace: request.namespace.clone(),
        }),
        StatusCode::FORBIDDEN => {
            warn!("Access denied to project '{}'", request.namespace);
            Err(PromptVaultError::AccessDenied {
                namespace: request.namespace.clone(),
            })
        }
        other => {
            warn!("API error {}: {}", other.as_u16(), body);
            Err(PromptVaultError::Api {
                status: other.as_u16(),
                body,
            })
        }
    }
}
