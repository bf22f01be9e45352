use std::sync::Arc;

use inbox_agent::api::agent_routes;
use inbox_agent::config::AgentConfig;
use inbox_agent::llm::{LlmConfig, create_provider};
use inbox_agent::pipeline::prompts::DefaultPrompts;
use inbox_agent::pipeline::workflow::EmailWorkflow;
use inbox_agent::sanitize::WhitespaceSanitizer;

#[tokio::main]
async fn main() -> inbox_agent::error::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = AgentConfig::from_env()?;

    eprintln!("🤖 Inbox Agent v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   Model: {}", config.model);
    eprintln!("   Inference: {}", config.base_url);
    eprintln!("   Agent API: http://{}/agent/run", config.bind_addr());
    eprintln!("   Scheduling link: {}\n", config.scheduling_link);

    // Create LLM provider
    let llm = create_provider(&LlmConfig {
        base_url: config.base_url.clone(),
        model: config.model.clone(),
    })?;

    // Assemble the fixed workflow with the demo strategies
    let workflow = Arc::new(EmailWorkflow::new(
        llm,
        Arc::new(DefaultPrompts),
        Arc::new(WhitespaceSanitizer),
        config.scheduling_link.clone(),
    ));

    let app = agent_routes(workflow);
    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    tracing::info!(port = config.port, "Agent HTTP server started");
    axum::serve(listener, app).await?;

    Ok(())
}
