//! Draft reply step — second node of the workflow.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::error::PipelineError;
use crate::llm::{ChatMessage, CompletionRequest, LlmProvider};
use crate::pipeline::prompts::PromptStrategy;
use crate::pipeline::state::{AgentState, Category, FALLBACK_REPLY, SPAM_REPLY};
use crate::pipeline::workflow::AgentStep;
use crate::sanitize::ReplySanitizer;

/// Temperature for drafting (greedy, matches categorization).
const DRAFT_TEMPERATURE: f32 = 0.0;

/// Token cap for draft replies.
const DRAFT_MAX_TOKENS: u32 = 512;

/// Drafts a reply based on the assigned category.
///
/// Spam short-circuits to the `IGNORE` sentinel without a model call.
/// Model failures never escape this step: the reply falls back to a
/// generic acknowledgment.
pub struct DraftStep {
    llm: Arc<dyn LlmProvider>,
    prompts: Arc<dyn PromptStrategy>,
    sanitizer: Arc<dyn ReplySanitizer>,
    scheduling_link: String,
}

impl DraftStep {
    pub fn new(
        llm: Arc<dyn LlmProvider>,
        prompts: Arc<dyn PromptStrategy>,
        sanitizer: Arc<dyn ReplySanitizer>,
        scheduling_link: impl Into<String>,
    ) -> Self {
        Self {
            llm,
            prompts,
            sanitizer,
            scheduling_link: scheduling_link.into(),
        }
    }
}

#[async_trait]
impl AgentStep for DraftStep {
    fn name(&self) -> &'static str {
        "draft"
    }

    async fn apply(&self, state: &mut AgentState) -> Result<(), PipelineError> {
        let category = state.category.ok_or(PipelineError::CategoryNotSet)?;

        if category == Category::Spam {
            debug!("Spam detected, skipping draft model call");
            state.generated_reply = Some(SPAM_REPLY.to_string());
            return Ok(());
        }

        let prompt = self.prompts.draft_prompt(
            category,
            &state.email_content,
            &state.history,
            &self.scheduling_link,
        );

        let request = CompletionRequest::new(vec![ChatMessage::user(prompt)])
            .with_temperature(DRAFT_TEMPERATURE)
            .with_max_tokens(DRAFT_MAX_TOKENS);

        let reply = match self.llm.complete(request).await {
            Ok(response) => self.sanitizer.sanitize(&response.content),
            Err(e) => {
                warn!(error = %e, "Draft generation failed, using fallback reply");
                FALLBACK_REPLY.to_string()
            }
        };

        state.generated_reply = Some(reply);
        Ok(())
    }
}
