//! Prompt identifiers
//!
//! Attribute-style names use underscores (`research_manager`) while the
//! service addresses prompts and projects by hyphenated slugs
//! (`research-manager`). Everything user-facing goes through
//! [`to_wire_name`] before it reaches the wire.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Rewrite an attribute-style name into the hyphenated form the service expects
pub fn to_wire_name(name: &str) -> String {
    name.replace('_', "-")
}

/// Errors from parsing a dotted `<namespace>.<slug>` path
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    #[error("Invalid prompt path '{0}': expected <namespace>.<slug>")]
    InvalidPath(String),
}

/// A fully resolved (namespace, slug) pair in wire form
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PromptPath {
    pub namespace: String,
    pub slug: String,
}

impl PromptPath {
    /// Build a path from attribute-style names, rewriting both segments
    pub fn new(namespace: &str, slug: &str) -> Self {
        Self {
            namespace: to_wire_name(namespace),
            slug: to_wire_name(slug),
        }
    }
}

impl FromStr for PromptPath {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split('.');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(namespace), Some(slug), None) if !namespace.is_empty() && !slug.is_empty() => {
                Ok(Self::new(namespace, slug))
            }
            _ => Err(PathError::InvalidPath(s.to_string())),
        }
    }
}

impl fmt::Display for PromptPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.namespace, self.slug)
    }
}
