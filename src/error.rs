//! Error types for the inbox agent.

/// Top-level error type for the agent.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    #[error("Pipeline error: {0}")]
    Pipeline(#[from] PipelineError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Model client errors.
///
/// These never reach the HTTP caller — the pipeline steps recover with
/// hardcoded fallback values. They still carry enough detail for the logs.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    #[error("Provider {provider} request failed: {reason}")]
    RequestFailed { provider: String, reason: String },

    #[error("Invalid response from {provider}: {reason}")]
    InvalidResponse { provider: String, reason: String },
}

/// Workflow errors that escape to the API boundary.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("draft step ran before a category was assigned")]
    CategoryNotSet,

    #[error("workflow finished without a {field} value")]
    IncompleteState { field: &'static str },
}

/// Result type alias for the agent.
pub type Result<T> = std::result::Result<T, Error>;
