//! Prompt source trait and the two-level namespace handle

use std::collections::HashMap;
use std::sync::Mutex;

use crate::error::{PromptVaultError, Result};
use crate::identifier::to_wire_name;

/// Anything that can resolve (slug, namespace, version) to prompt content.
///
/// Each call is independent: no caching, so repeated calls re-fetch.
pub trait PromptSource {
    /// Fetch a prompt by slug within a namespace, optionally pinned to a version
    fn get_prompt(&self, slug: &str, namespace: &str, version: Option<u32>) -> Result<String>;

    /// Bind a namespace, rewriting underscores to hyphens
    fn namespace(&self, name: &str) -> Namespace<'_, Self>
    where
        Self: Sized,
    {
        Namespace::new(self, name)
    }
}

/// A source bound to one namespace.
///
/// `source.namespace("agents_lextenso").prompt("research_manager")` fetches
/// `research-manager` from `agents-lextenso`. Resolution stops at the second
/// level: [`Namespace::prompt`] returns the content, not another handle.
#[derive(Debug)]
pub struct Namespace<'a, S: PromptSource> {
    source: &'a S,
    name: String,
}

impl<'a, S: PromptSource> Namespace<'a, S> {
    pub fn new(source: &'a S, name: &str) -> Self {
        Self {
            source,
            name: to_wire_name(name),
        }
    }

    /// Wire-form namespace this handle is bound to
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Fetch the latest version of a prompt in this namespace.
    ///
    /// Version pinning goes through [`PromptSource::get_prompt`] instead.
    pub fn prompt(&self, name: &str) -> Result<String> {
        let slug = to_wire_name(name);
        self.source.get_prompt(&slug, &self.name, None)
    }
}

/// A recorded call against [`MockPromptSource`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedFetch {
    pub slug: String,
    pub namespace: String,
    pub version: Option<u32>,
}

/// In-memory source for tests: serves fixed prompts and records every call
#[derive(Debug, Default)]
pub struct MockPromptSource {
    prompts: HashMap<(String, String), String>,
    calls: Mutex<Vec<RecordedFetch>>,
}

impl MockPromptSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register content for a (namespace, slug) pair given in wire form
    pub fn with_prompt(
        mut self,
        namespace: impl Into<String>,
        slug: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        self.prompts
            .insert((namespace.into(), slug.into()), content.into());
        self
    }

    /// All calls made so far, in order
    pub fn calls(&self) -> Vec<RecordedFetch> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

impl PromptSource for MockPromptSource {
    fn get_prompt(&self, slug: &str, namespace: &str, version: Option<u32>) -> Result<String> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(RecordedFetch {
                slug: slug.to_string(),
                namespace: namespace.to_string(),
                version,
            });
        }

        self.prompts
            .get(&(namespace.to_string(), slug.to_string()))
            .cloned()
            .ok_or_else(|| PromptVaultError::NotFound {
                slug: slug.to_string(),
                namespace: namespace.to_string(),
            })
    }
}
