//! Prompt construction for the workflow steps.
//!
//! The shipped `DefaultPrompts` are the demo prompts. The production prompt
//! engineering (chain-of-thought categorization, negotiation scripts for
//! leads, de-escalation for urgent threads) plugs in behind `PromptStrategy`
//! without changing the pipeline shape.

use crate::pipeline::state::Category;

/// Sentinel substituted when the caller supplies no conversation history.
pub const NO_HISTORY: &str = "No previous history.";

/// Builds the prompts the two workflow steps send to the model.
pub trait PromptStrategy: Send + Sync {
    /// Prompt for the categorize step.
    fn categorize_prompt(&self, email_content: &str, history: &str) -> String;

    /// Prompt for the draft step.
    fn draft_prompt(
        &self,
        category: Category,
        email_content: &str,
        history: &str,
        scheduling_link: &str,
    ) -> String;
}

/// Demo prompts.
pub struct DefaultPrompts;

impl PromptStrategy for DefaultPrompts {
    fn categorize_prompt(&self, email_content: &str, history: &str) -> String {
        format!(
            "You are an AI assistant.\n\
             Analyze the following email conversation:\n\n\
             HISTORY: \"{}\"\n\
             CURRENT EMAIL: \"{}\"\n\n\
             Categorize into one of: URGENT, LEAD, SPAM, OTHER.\n\
             Return ONLY the category name.",
            history_or_sentinel(history),
            email_content,
        )
    }

    fn draft_prompt(
        &self,
        category: Category,
        email_content: &str,
        history: &str,
        scheduling_link: &str,
    ) -> String {
        format!(
            "You are a helpful AI assistant.\n\
             Reply to the email based on category: {}\n\n\
             HISTORY: \"{}\"\n\
             EMAIL: \"{}\"\n\n\
             Link to include: {}\n\
             Keep it professional and short.",
            category,
            history_or_sentinel(history),
            email_content,
            scheduling_link,
        )
    }
}

/// Substitute the sentinel when no history was provided.
fn history_or_sentinel(history: &str) -> &str {
    if history.trim().is_empty() {
        NO_HISTORY
    } else {
        history
    }
}
