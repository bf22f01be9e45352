//! Model client abstraction.
//!
//! The pipeline depends on this trait only — concrete transports (Ollama
//! today) and test mocks plug in behind `Arc<dyn LlmProvider>`.

use async_trait::async_trait;

use crate::error::LlmError;

/// A single chat message sent to the model.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

/// Chat message roles, serialized lowercase on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
    Assistant,
}

impl ChatMessage {
    /// Create a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::System,
            content: content.into(),
        }
    }

    /// Create a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }
}

/// A completion request: messages plus sampling parameters.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub messages: Vec<ChatMessage>,
    /// Sampling temperature. The pipeline always uses 0 (greedy).
    pub temperature: f32,
    /// Optional cap on generated tokens.
    pub max_tokens: Option<u32>,
}

impl CompletionRequest {
    /// Create a request with default sampling (temperature 0, no token cap).
    pub fn new(messages: Vec<ChatMessage>) -> Self {
        Self {
            messages,
            temperature: 0.0,
            max_tokens: None,
        }
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }
}

/// A completed generation.
#[derive(Debug, Clone)]
pub struct CompletionResponse {
    /// Raw generated text.
    pub content: String,
}

/// Text-generation capability the pipeline depends on.
///
/// Single request/response — no retry, no streaming.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// The model identifier this provider talks to.
    fn model_name(&self) -> &str;

    /// Send one completion request and return the generated text.
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, LlmError>;
}
