//! Prompt client layer
//!
//! This module provides:
//! - PromptSource trait and the two-level Namespace handle
//! - PromptClient, the blocking HTTP implementation
//! - MockPromptSource for tests

pub mod http;
pub mod source;

pub use http::{API_KEY_ENV, BASE_URL_ENV, ClientConfig, PromptClient, PromptRequest, REQUEST_TIMEOUT};
pub use source::{MockPromptSource, Namespace, PromptSource, RecordedFetch};
