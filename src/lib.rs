//! PromptVault - client for the Prompt Manager API
//!
//! Prompts are fetched by slug within a project (namespace). Two call shapes
//! are supported:
//!
//! ```no_run
//! use promptvault::PromptSource;
//!
//! promptvault::configure("https://prompts.example.com", "pk_...");
//!
//! // Explicit form, with optional version pinning
//! let v1 = promptvault::get_prompt("research-manager", "agents-lextenso", Some(1))?;
//!
//! // Two-level form: namespace, then prompt (latest version)
//! let latest = promptvault::vault().namespace("agents_lextenso").prompt("research_manager")?;
//! # Ok::<(), promptvault::PromptVaultError>(())
//! ```
//!
//! Independent configurations use [`PromptClient`] directly.

pub mod client;
pub mod error;
pub mod global;
pub mod identifier;

pub use client::{ClientConfig, MockPromptSource, Namespace, PromptClient, PromptRequest, PromptSource};
pub use error::{PromptVaultError, Result};
pub use global::{Vault, configure, configure_from_env, get_prompt, namespace, vault};
pub use identifier::{PromptPath, to_wire_name};
