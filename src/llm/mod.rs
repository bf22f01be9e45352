//! LLM integration for the inbox agent.
//!
//! Supports:
//! - **Ollama**: locally hosted models over the `/api/chat` HTTP endpoint
//!
//! The pipeline only sees the `LlmProvider` trait; tests substitute mocks.

pub mod ollama;
pub mod provider;

pub use ollama::OllamaProvider;
pub use provider::*;

use std::sync::Arc;

use crate::error::LlmError;

/// Configuration for creating an LLM provider.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    /// Base URL of the inference endpoint.
    pub base_url: String,
    /// Model identifier.
    pub model: String,
}

/// Create an LLM provider from configuration.
pub fn create_provider(config: &LlmConfig) -> Result<Arc<dyn LlmProvider>, LlmError> {
    let provider = OllamaProvider::new(&config.base_url, &config.model)?;
    tracing::info!("Using Ollama (model: {})", config.model);
    Ok(Arc::new(provider))
}
