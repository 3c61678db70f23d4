//! Records persisted in local key-value storage.
//!
//! Both structs serialize to the exact JSON shapes stored on device
//! (`{uid, email}` and `{id, text, image, sender, createdAt}`), so they can
//! be handed straight to the UI layer or round-tripped through storage.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

/// Persisted proof-of-login.
///
/// Written once after a successful credential exchange, read at every launch
/// to decide routing, removed on logout. Exactly one instance exists, stored
/// under the `user` key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionRecord {
    /// Opaque user id issued by the authentication provider.
    pub uid: String,
    /// The email address used to authenticate.
    pub email: String,
}

// ---------------------------------------------------------------------------
// Message
// ---------------------------------------------------------------------------

/// A single chat entry, text or image.
///
/// Exactly one of `text` (non-empty) / `image` (non-`None`) is expected to
/// carry content, but nothing enforces this; a record with both or neither
/// is representable and the renderer shows whichever parts are present.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MessageRecord {
    /// Stringified creation timestamp (millisecond epoch). Not guaranteed
    /// unique under rapid sends, not monotonic across clock adjustments.
    pub id: String,
    /// Message body; empty when the message carries an image instead.
    pub text: String,
    /// Local image URI; `None` for text-only messages.
    pub image: Option<String>,
    /// Email of the session that created the message.
    pub sender: String,
    /// Creation time, stored as an RFC-3339 string.
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn session_record_wire_shape() {
        let session = SessionRecord {
            uid: "abc123".into(),
            email: "a@b.com".into(),
        };
        let json = serde_json::to_value(&session).unwrap();
        assert_eq!(json, serde_json::json!({"uid": "abc123", "email": "a@b.com"}));
    }

    #[test]
    fn message_record_wire_shape_is_camel_case() {
        let msg = MessageRecord {
            id: "1700000000000".into(),
            text: "halo".into(),
            image: None,
            sender: "a@b.com".into(),
            created_at: Utc.with_ymd_and_hms(2023, 11, 14, 22, 13, 20).unwrap(),
        };
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["createdAt"], "2023-11-14T22:13:20Z");
        assert_eq!(json["image"], serde_json::Value::Null);
        assert_eq!(json["sender"], "a@b.com");
    }

    #[test]
    fn message_record_round_trip() {
        let msg = MessageRecord {
            id: "1700000000000".into(),
            text: String::new(),
            image: Some("file:///tmp/photo.jpg".into()),
            sender: "a@b.com".into(),
            created_at: Utc::now(),
        };
        let json = serde_json::to_string(&msg).unwrap();
        let back: MessageRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, msg);
    }
}
