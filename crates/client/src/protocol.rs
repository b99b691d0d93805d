//! Request and response types exchanged with the paste backend.
//!
//! Field names serialise as camelCase to match the backend's JSON contract.
//! Timestamps are offset-less local date-times, which is how the backend
//! emits them.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Request body for `POST /pastes`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaste {
    /// Paste content; already marker-tagged ciphertext when the user chose a
    /// password.
    pub content: String,

    /// Syntax-highlighting language hint (e.g. `"rust"`, `"plaintext"`).
    pub syntax: String,

    /// Delete the paste on first read.
    pub is_burn_after_reading: bool,

    /// Minutes until expiry; omitted for never-expiring pastes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expire_minutes: Option<u32>,
}

impl CreatePaste {
    /// A plain, never-expiring, non-burning paste with the default syntax.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            syntax: "plaintext".into(),
            is_burn_after_reading: false,
            expire_minutes: None,
        }
    }
}

/// Successful response body for `POST /pastes`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedPaste {
    /// Public lookup key of the new paste.
    pub key: String,
    /// Backend-relative URL of the paste (e.g. `"/aB3xK9mQ"`).
    pub url: String,
}

/// Response body for `GET /pastes/{key}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paste {
    pub key: String,
    pub content: String,
    pub syntax: String,
    pub is_burn_after_reading: bool,
    /// Absent for never-expiring pastes.
    #[serde(default)]
    pub expire_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
}

impl Paste {
    /// Whether the stored content is password-protected.
    ///
    /// The backend stores protection state only implicitly, via the content
    /// marker; the viewer derives it here to decide whether a password is
    /// needed before display.
    pub fn is_protected(&self) -> bool {
        paste_protect::is_protected(&self.content)
    }
}

/// Error body returned by the backend on any non-2xx status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Human-readable description from the backend.
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn create_paste_serialises_camel_case() {
        let req = CreatePaste {
            content: "fn main() {}".into(),
            syntax: "rust".into(),
            is_burn_after_reading: true,
            expire_minutes: Some(60),
        };
        let v = serde_json::to_value(&req).unwrap();
        assert_eq!(
            v,
            json!({
                "content": "fn main() {}",
                "syntax": "rust",
                "isBurnAfterReading": true,
                "expireMinutes": 60,
            })
        );
    }

    #[test]
    fn expire_minutes_omitted_when_none() {
        let req = CreatePaste::new("x");
        let v = serde_json::to_value(&req).unwrap();
        assert!(v.get("expireMinutes").is_none());
        assert_eq!(v["syntax"], "plaintext");
    }

    #[test]
    fn paste_deserialises_backend_shape() {
        let p: Paste = serde_json::from_value(json!({
            "key": "aB3xK9mQ",
            "content": "hello",
            "syntax": "plaintext",
            "isBurnAfterReading": false,
            "expireAt": "2026-08-23T10:30:00",
            "createdAt": "2026-08-23T10:20:00",
        }))
        .unwrap();
        assert_eq!(p.key, "aB3xK9mQ");
        assert!(p.expire_at.is_some());
        assert!(!p.is_protected());
    }

    #[test]
    fn paste_tolerates_missing_timestamps() {
        let p: Paste = serde_json::from_value(json!({
            "key": "k",
            "content": "ENC:abc123==",
            "syntax": "plaintext",
            "isBurnAfterReading": true,
        }))
        .unwrap();
        assert!(p.expire_at.is_none());
        assert!(p.is_protected());
    }
}
