//! Configuration types.

use crate::error::ConfigError;

/// Default model served by the local Ollama instance.
const DEFAULT_MODEL: &str = "llama3.2";

/// Default Ollama endpoint.
const DEFAULT_BASE_URL: &str = "http://localhost:11434";

/// Scheduling link embedded in draft replies.
const DEFAULT_SCHEDULING_LINK: &str = "https://cal.com/demo-link";

/// Default HTTP port for the agent API.
const DEFAULT_PORT: u16 = 8000;

/// Agent configuration.
///
/// Read once from the environment at startup and immutable afterwards.
/// The model client and workflow receive explicit copies of the values
/// they need — there is no ambient global configuration.
#[derive(Debug, Clone)]
pub struct AgentConfig {
    /// Model identifier passed to the inference endpoint.
    pub model: String,
    /// Base URL of the Ollama-compatible inference endpoint.
    pub base_url: String,
    /// Scheduling link embedded in draft prompts.
    pub scheduling_link: String,
    /// HTTP port the agent API binds on (host is always 0.0.0.0).
    pub port: u16,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            scheduling_link: DEFAULT_SCHEDULING_LINK.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl AgentConfig {
    /// Build config from environment variables, falling back to defaults.
    ///
    /// A present-but-unparsable `AGENT_PORT` is a hard error rather than a
    /// silent fallback.
    pub fn from_env() -> Result<Self, ConfigError> {
        let model = std::env::var("AGENT_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        let base_url = std::env::var("OLLAMA_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let scheduling_link = std::env::var("AGENT_SCHEDULING_LINK")
            .unwrap_or_else(|_| DEFAULT_SCHEDULING_LINK.to_string());

        let port = parse_port(std::env::var("AGENT_PORT").ok())?;

        Ok(Self {
            model,
            base_url,
            scheduling_link,
            port,
        })
    }

    /// Socket address string the HTTP server binds to.
    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

/// Parse an optional port value, defaulting when absent.
fn parse_port(raw: Option<String>) -> Result<u16, ConfigError> {
    match raw {
        None => Ok(DEFAULT_PORT),
        Some(s) => s.parse().map_err(|_| ConfigError::InvalidValue {
            key: "AGENT_PORT".to_string(),
            message: format!("expected a port number, got '{s}'"),
        }),
    }
}
