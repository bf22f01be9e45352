//! Reply sanitization — passthrough stub.
//!
//! Matches the seam the draft step calls, but the shipped implementation
//! only trims whitespace. The production sanitizer additionally:
//! 1. Removes model-generated `Subject:` lines.
//! 2. Rejects unresolved template placeholders (e.g. `[Insert Name]`).
//! 3. Enforces signature and tone policy.
//!
//! Implementations must be idempotent: `sanitize(sanitize(x)) == sanitize(x)`.

/// Post-processing applied to raw model output before it is returned.
pub trait ReplySanitizer: Send + Sync {
    fn sanitize(&self, text: &str) -> String;
}

/// Trims leading and trailing whitespace only.
pub struct WhitespaceSanitizer;

impl ReplySanitizer for WhitespaceSanitizer {
    fn sanitize(&self, text: &str) -> String {
        text.trim().to_string()
    }
}
