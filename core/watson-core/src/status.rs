//! Status classification for the Watson state file.
//!
//! Watson writes a `project` string into its state file while a session is
//! running and drops the field (or the whole file) when tracking stops. The
//! classifier here only looks at that one key; every other key may change
//! without affecting the result.

use serde::{Deserialize, Serialize};

/// Whether a Watson session is currently being recorded.
///
/// Closed two-valued set; any ambiguous input resolves to `Inactive`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Active,
    #[default]
    Inactive,
}

impl Status {
    /// Classifies raw state-file bytes.
    ///
    /// Returns `Active` if and only if the bytes parse as a JSON object with
    /// a top-level `"project"` key holding a JSON string (any content,
    /// including the empty string). Everything else — empty buffer, invalid
    /// or truncated JSON, non-object root, missing `project`, `project` of a
    /// non-string type — is `Inactive`. Malformed input is a defined case,
    /// not an error: Watson may be mid-write when we read.
    pub fn from_state_bytes(bytes: &[u8]) -> Status {
        match serde_json::from_slice::<serde_json::Value>(bytes) {
            Ok(value) if value.get("project").is_some_and(|p| p.is_string()) => Status::Active,
            _ => Status::Inactive,
        }
    }

    pub fn is_active(self) -> bool {
        self == Status::Active
    }
}
