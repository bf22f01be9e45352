//! Categorize step — first node of the workflow.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::error::PipelineError;
use crate::llm::{ChatMessage, CompletionRequest, LlmProvider};
use crate::pipeline::prompts::PromptStrategy;
use crate::pipeline::state::{AgentState, Category};
use crate::pipeline::workflow::AgentStep;

/// Temperature for categorization (greedy).
const CATEGORIZE_TEMPERATURE: f32 = 0.0;

/// Token cap — the model should return a single category name.
const CATEGORIZE_MAX_TOKENS: u32 = 16;

/// Classifies the email into one of the four categories.
///
/// Model failures never escape this step: the category falls back to
/// `OTHER` and the workflow continues.
pub struct CategorizeStep {
    llm: Arc<dyn LlmProvider>,
    prompts: Arc<dyn PromptStrategy>,
}

impl CategorizeStep {
    pub fn new(llm: Arc<dyn LlmProvider>, prompts: Arc<dyn PromptStrategy>) -> Self {
        Self { llm, prompts }
    }
}

#[async_trait]
impl AgentStep for CategorizeStep {
    fn name(&self) -> &'static str {
        "categorize"
    }

    async fn apply(&self, state: &mut AgentState) -> Result<(), PipelineError> {
        let prompt = self
            .prompts
            .categorize_prompt(&state.email_content, &state.history);

        let request = CompletionRequest::new(vec![ChatMessage::user(prompt)])
            .with_temperature(CATEGORIZE_TEMPERATURE)
            .with_max_tokens(CATEGORIZE_MAX_TOKENS);

        let category = match self.llm.complete(request).await {
            Ok(response) => Category::from_model_output(&response.content),
            Err(e) => {
                warn!(error = %e, "Categorization failed, falling back to OTHER");
                Category::Other
            }
        };

        info!(category = %category, "Email categorized");
        state.category = Some(category);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::error::LlmError;
    use crate::llm::CompletionResponse;
    use crate::pipeline::prompts::DefaultPrompts;

    /// Mock LLM returning a fixed response.
    struct FixedLlm {
        response: String,
    }

    #[async_trait]
    impl LlmProvider for FixedLlm {
        fn model_name(&self) -> &str {
            "fixed"
        }

        async fn complete(
            &self,
            _request: CompletionRequest,
        ) -> Result<CompletionResponse, LlmError> {
            Ok(CompletionResponse {
                content: self.response.clone(),
            })
        }
    }

    /// Mock LLM that always fails.
    struct FailingLlm;

    #[async_trait]
    impl LlmProvider for FailingLlm {
        fn model_name(&self) -> &str {
            "failing"
        }

        async fn complete(
            &self,
            _request: CompletionRequest,
        ) -> Result<CompletionResponse, LlmError> {
            Err(LlmError::RequestFailed {
                provider: "failing".to_string(),
                reason: "connection refused".to_string(),
            })
        }
    }

    fn step(llm: Arc<dyn LlmProvider>) -> CategorizeStep {
        CategorizeStep::new(llm, Arc::new(DefaultPrompts))
    }

    #[tokio::test]
    async fn valid_label_is_assigned() {
        let step = step(Arc::new(FixedLlm {
            response: "URGENT".to_string(),
        }));
        let mut state = AgentState::new("Please fix my leaking faucet ASAP", "");

        step.apply(&mut state).await.unwrap();
        assert_eq!(state.category, Some(Category::Urgent));
    }

    #[tokio::test]
    async fn label_embedded_in_prose_is_extracted() {
        let step = step(Arc::new(FixedLlm {
            response: "This looks like SPAM content".to_string(),
        }));
        let mut state = AgentState::new("Win a free cruise!!!", "");

        step.apply(&mut state).await.unwrap();
        assert_eq!(state.category, Some(Category::Spam));
    }

    #[tokio::test]
    async fn unrecognized_output_falls_back_to_other() {
        let step = step(Arc::new(FixedLlm {
            response: "I am not sure about this one".to_string(),
        }));
        let mut state = AgentState::new("Hello", "");

        step.apply(&mut state).await.unwrap();
        assert_eq!(state.category, Some(Category::Other));
    }

    #[tokio::test]
    async fn empty_output_falls_back_to_other() {
        let step = step(Arc::new(FixedLlm {
            response: String::new(),
        }));
        let mut state = AgentState::new("Hello", "");

        step.apply(&mut state).await.unwrap();
        assert_eq!(state.category, Some(Category::Other));
    }

    #[tokio::test]
    async fn model_failure_falls_back_to_other() {
        let step = step(Arc::new(FailingLlm));
        let mut state = AgentState::new("Hello", "");

        // No error escapes the step.
        step.apply(&mut state).await.unwrap();
        assert_eq!(state.category, Some(Category::Other));
    }
}
