//! API token metadata.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Metadata for a long-lived, function-scoped API token.
///
/// The plaintext secret is never part of this type. It exists only
/// transiently in the create response; afterwards the first characters
/// survive client-side as `prefix`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiToken {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub prefix: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_used: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl ApiToken {
    /// The display prefix for a freshly issued secret: its first eight
    /// characters followed by an ellipsis.
    pub fn prefix_of(secret: &str) -> String {
        let head: String = secret.chars().take(8).collect();
        format!("{}...", head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn prefix_is_eight_chars_and_ellipsis() {
        assert_eq!(
            ApiToken::prefix_of("c0ffee00deadbeef"),
            "c0ffee00..."
        );
    }

    #[test]
    fn short_secret_keeps_what_exists() {
        assert_eq!(ApiToken::prefix_of("abc"), "abc...");
    }

    #[test]
    fn deserializes_backend_listing_entry() {
        let token: ApiToken = serde_json::from_value(json!({
            "id": "tok-1",
            "name": "ci token",
            "prefix": "c0ffee00...",
            "created_at": "2025-11-02T10:30:00Z",
            "is_active": true
        }))
        .unwrap();

        assert_eq!(token.id, "tok-1");
        assert!(token.is_active);
        assert!(token.last_used.is_none());
    }
}
