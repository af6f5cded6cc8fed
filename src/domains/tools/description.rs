//! Rich tool descriptions.
//!
//! Some tools advertise a JSON object instead of a plain sentence so that
//! the calling model knows when to use them and what they change.

use serde::Serialize;

/// Structured description advertised as a tool's `description` field.
#[derive(Debug, Clone, Serialize)]
pub struct RichToolDescription {
    pub description: &'static str,
    pub use_when: &'static str,
    pub side_effects: Option<&'static str>,
}

impl RichToolDescription {
    /// Serialize to the compact JSON string sent to clients.
    pub fn to_json(&self) -> String {
        // A struct of strings always serializes
        serde_json::to_string(self).unwrap_or_else(|_| self.description.to_string())
    }
}
