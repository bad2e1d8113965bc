//! Process-wide configuration store
//!
//! `configure` once, then fetch from anywhere in the process. Last call wins.
//! The store sits behind a read-mostly lock so concurrent fetches only take
//! read guards; prefer [`PromptClient`] when more than one configuration is
//! needed.

use std::sync::{OnceLock, RwLock};

use log::{debug, info};
use reqwest::blocking::Client;

use crate::client::{ClientConfig, Namespace, PromptClient, PromptRequest, PromptSource, REQUEST_TIMEOUT};
use crate::error::{PromptVaultError, Result};

static CONFIG: RwLock<Option<ClientConfig>> = RwLock::new(None);

/// Shared connection pool, built on first fetch
static HTTP: OnceLock<Client> = OnceLock::new();

static VAULT: Vault = Vault;

/// Store the base URL and API key, stripping any trailing slash from the URL
pub fn configure(base_url: &str, api_key: &str) {
    let config = ClientConfig::new(base_url, api_key);
    info!("PromptVault configured for {}", config.base_url);

    let mut guard = CONFIG.write().unwrap_or_else(|e| e.into_inner());
    *guard = Some(config);
}

/// Configure from PROMPTVAULT_BASE_URL and PROMPTVAULT_API_KEY
pub fn configure_from_env() -> Result<()> {
    let config = ClientConfig::from_env()?;
    configure(&config.base_url, &config.api_key);
    Ok(())
}

fn current_config() -> Option<ClientConfig> {
    let guard = CONFIG.read().unwrap_or_else(|e| e.into_inner());
    guard.as_ref().cloned()
}

fn shared_http() -> Result<Client> {
    if let Some(client) = HTTP.get() {
        return Ok(client.clone());
    }

    debug!("Building shared HTTP client");
    let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
    // A concurrent first fetch may have won the race; either client works
    let _ = HTTP.set(client.clone());
    Ok(client)
}

/// Fetch a prompt with the process-wide configuration.
///
/// Fails with [`PromptVaultError::NotConfigured`] before [`configure`] has
/// been called, without touching the network.
pub fn get_prompt(slug: &str, namespace: &str, version: Option<u32>) -> Result<String> {
    let config = current_config().ok_or(PromptVaultError::NotConfigured)?;
    let client = PromptClient::with_http(shared_http()?, config);
    client.fetch(&PromptRequest::new(slug, namespace).with_version(version))
}

/// Handle on the process-wide store
#[derive(Debug, Clone, Copy, Default)]
pub struct Vault;

impl PromptSource for Vault {
    fn get_prompt(&self, slug: &str, namespace: &str, version: Option<u32>) -> Result<String> {
        get_prompt(slug, namespace, version)
    }
}

/// The process-wide store as a [`PromptSource`]
pub fn vault() -> &'static Vault {
    &VAULT
}

/// Bind a namespace on the process-wide store
pub fn namespace(name: &str) -> Namespace<'static, Vault> {
    VAULT.namespace(name)
}
