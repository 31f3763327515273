//! What a liked form should show after a failed unlike

use serde::Deserialize;

/// Resulting state of a liked form when deleting its record fails
///
/// The error is surfaced either way; the policy only decides the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DeleteFailurePolicy {
    /// Leave the form liked, matching what the server still holds
    #[default]
    Keep,
    /// Show the form as unliked anyway (optimistic UI)
    Clear,
}

impl DeleteFailurePolicy {
    /// Parse from a config value (`keep` or `clear`, case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "keep" => Some(Self::Keep),
            "clear" => Some(Self::Clear),
            _ => None,
        }
    }

    #[must_use]
    pub fn clears_marker(&self) -> bool {
        matches!(self, Self::Clear)
    }
}
