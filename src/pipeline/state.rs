//! Shared types for the email processing workflow.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Reply sentinel for spam — the draft step never calls the model for spam.
pub const SPAM_REPLY: &str = "IGNORE";

/// Generic acknowledgment used when the draft model call fails.
pub const FALLBACK_REPLY: &str = "Thank you for your email. We will respond shortly.";

// ── Category ────────────────────────────────────────────────────────

/// Classification assigned to an inbound email.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
    Urgent,
    Lead,
    Spam,
    Other,
}

impl Category {
    /// All categories, in the order the classifier output is scanned.
    pub const ALL: [Category; 4] = [
        Category::Urgent,
        Category::Lead,
        Category::Spam,
        Category::Other,
    ];

    /// Uppercase wire label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Urgent => "URGENT",
            Category::Lead => "LEAD",
            Category::Spam => "SPAM",
            Category::Other => "OTHER",
        }
    }

    /// Resolve a raw classifier output to a category.
    ///
    /// The output is trimmed and uppercased, then scanned for the four
    /// labels as substrings in `ALL` order — first hit wins. Anything
    /// else resolves to `Other`.
    pub fn from_model_output(raw: &str) -> Self {
        let normalized = raw.trim().to_uppercase();
        Self::ALL
            .into_iter()
            .find(|category| normalized.contains(category.as_str()))
            .unwrap_or(Category::Other)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Agent state ─────────────────────────────────────────────────────

/// Transient per-request state, passed by value between workflow steps.
///
/// Fields only accumulate — steps add or overwrite, never remove. The
/// state is created fresh per request and discarded after the response.
#[derive(Debug, Clone)]
pub struct AgentState {
    /// The inbound email body. Immutable once set.
    pub email_content: String,
    /// Prior conversation context. Empty string means no history.
    pub history: String,
    /// Set by the categorize step; always a valid member afterwards.
    pub category: Option<Category>,
    /// Set by the draft step; `SPAM_REPLY` when the category is spam.
    pub generated_reply: Option<String>,
}

impl AgentState {
    /// Build the initial state for an inbound request.
    pub fn new(email_content: impl Into<String>, history: impl Into<String>) -> Self {
        Self {
            email_content: email_content.into(),
            history: history.into(),
            category: None,
            generated_reply: None,
        }
    }
}

// ── Terminal result ─────────────────────────────────────────────────

/// Result of running an email through the full workflow.
#[derive(Debug, Clone, Serialize)]
pub struct ProcessedEmail {
    /// The resolved category.
    pub category: Category,
    /// The final reply text.
    pub reply: String,
    /// When processing completed.
    pub processed_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_labels_resolve() {
        assert_eq!(Category::from_model_output("URGENT"), Category::Urgent);
        assert_eq!(Category::from_model_output("LEAD"), Category::Lead);
        assert_eq!(Category::from_model_output("SPAM"), Category::Spam);
        assert_eq!(Category::from_model_output("OTHER"), Category::Other);
    }

    #[test]
    fn substring_match_resolves() {
        assert_eq!(
            Category::from_model_output("This looks like SPAM content"),
            Category::Spam
        );
        assert_eq!(
            Category::from_model_output("Category: LEAD."),
            Category::Lead
        );
    }

    #[test]
    fn lowercase_output_resolves() {
        assert_eq!(Category::from_model_output("urgent"), Category::Urgent);
        assert_eq!(Category::from_model_output("  spam  "), Category::Spam);
    }

    #[test]
    fn unknown_output_falls_back_to_other() {
        assert_eq!(Category::from_model_output(""), Category::Other);
        assert_eq!(
            Category::from_model_output("I cannot classify this."),
            Category::Other
        );
    }

    #[test]
    fn scan_order_is_fixed() {
        // When the output names several labels, the first in ALL order wins.
        assert_eq!(
            Category::from_model_output("URGENT or maybe SPAM"),
            Category::Urgent
        );
    }

    #[test]
    fn category_serializes_uppercase() {
        assert_eq!(
            serde_json::to_value(Category::Urgent).unwrap(),
            serde_json::json!("URGENT")
        );
        let parsed: Category = serde_json::from_str("\"SPAM\"").unwrap();
        assert_eq!(parsed, Category::Spam);
    }

    #[test]
    fn initial_state_is_unset() {
        let state = AgentState::new("Please fix my faucet", "");
        assert_eq!(state.email_content, "Please fix my faucet");
        assert!(state.history.is_empty());
        assert!(state.category.is_none());
        assert!(state.generated_reply.is_none());
    }
}
