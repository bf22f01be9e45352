//! Workflow orchestrator — a fixed, ordered sequence of typed steps.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tracing::{debug, info};

use crate::error::PipelineError;
use crate::llm::LlmProvider;
use crate::pipeline::categorize::CategorizeStep;
use crate::pipeline::draft::DraftStep;
use crate::pipeline::prompts::PromptStrategy;
use crate::pipeline::state::{AgentState, ProcessedEmail};
use crate::sanitize::ReplySanitizer;

/// A single workflow step: mutates the state, never removes fields.
#[async_trait]
pub trait AgentStep: Send + Sync {
    /// Step name for logging.
    fn name(&self) -> &'static str;

    /// Apply this step to the state.
    ///
    /// Inference failures are recovered inside the step; an `Err` here
    /// means the workflow itself is broken and surfaces at the API
    /// boundary.
    async fn apply(&self, state: &mut AgentState) -> Result<(), PipelineError>;
}

/// The fixed two-step email workflow: categorize → draft → terminal.
///
/// No conditional edges, no cycles, no parallel branches. Execution is
/// synchronous and deterministic given deterministic model responses.
pub struct EmailWorkflow {
    steps: Vec<Box<dyn AgentStep>>,
}

impl EmailWorkflow {
    /// Assemble the standard workflow with injected strategies.
    pub fn new(
        llm: Arc<dyn LlmProvider>,
        prompts: Arc<dyn PromptStrategy>,
        sanitizer: Arc<dyn ReplySanitizer>,
        scheduling_link: impl Into<String>,
    ) -> Self {
        Self {
            steps: vec![
                Box::new(CategorizeStep::new(
                    Arc::clone(&llm),
                    Arc::clone(&prompts),
                )),
                Box::new(DraftStep::new(llm, prompts, sanitizer, scheduling_link)),
            ],
        }
    }

    /// Build a workflow from an explicit step sequence (tests only).
    #[doc(hidden)]
    pub fn from_steps(steps: Vec<Box<dyn AgentStep>>) -> Self {
        Self { steps }
    }

    /// Run the workflow to its terminal state.
    pub async fn run(&self, mut state: AgentState) -> Result<ProcessedEmail, PipelineError> {
        for step in &self.steps {
            debug!(step = step.name(), "Running workflow step");
            step.apply(&mut state).await?;
        }

        let category = state
            .category
            .ok_or(PipelineError::IncompleteState { field: "category" })?;
        let reply = state
            .generated_reply
            .ok_or(PipelineError::IncompleteState { field: "reply" })?;

        info!(category = %category, "Email processed");
        Ok(ProcessedEmail {
            category,
            reply,
            processed_at: Utc::now(),
        })
    }
}
