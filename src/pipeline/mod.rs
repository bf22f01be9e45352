//! Email processing workflow.
//!
//! Every inbound email flows through the same fixed sequence:
//! 1. `CategorizeStep` — classify into URGENT / LEAD / SPAM / OTHER
//! 2. `DraftStep` — draft a reply (spam short-circuits to `IGNORE`)
//!
//! Inference failures are swallowed inside the steps with hardcoded
//! fallbacks; only workflow invariant violations reach the API boundary.

pub mod categorize;
pub mod draft;
pub mod prompts;
pub mod state;
pub mod workflow;

pub use prompts::{DefaultPrompts, PromptStrategy};
pub use state::{AgentState, Category, ProcessedEmail};
pub use workflow::{AgentStep, EmailWorkflow};
