//! Verified webhook payload.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A webhook payload that passed signature and shape validation.
///
/// Produced only by `WebhookVerifier::verify_and_parse`, after the signature
/// was checked against the exact body bytes. This is the only representation
/// of a delivery that application code should trust.
///
/// Fields are carried verbatim from the sender's JSON: required keys must be
/// present, but their values are not re-validated, so pattern-match on the
/// [`Value`]s explicitly rather than assuming types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerifiedPayload {
    /// Event type, e.g. `"contact.created"`.
    pub event: Value,

    /// Timestamp as sent in the body. Independent of the signed header
    /// timestamp; retried deliveries may legitimately differ.
    pub timestamp: Value,

    /// Event data.
    pub data: Value,

    /// Delivery ID from the `X-Webhook-Delivery-Id` header, empty if absent.
    #[serde(default)]
    pub delivery_id: String,
}

impl VerifiedPayload {
    /// Get the event type as a string, if it is one.
    #[must_use]
    pub fn event_str(&self) -> Option<&str> {
        self.event.as_str()
    }

    /// Get the body timestamp as an integer, if it is one.
    #[must_use]
    pub fn timestamp_i64(&self) -> Option<i64> {
        self.timestamp.as_i64()
    }

    /// Get a value from the event data by dotted path.
    #[must_use]
    pub fn get(&self, path: &str) -> Option<&Value> {
        let mut current = &self.data;
        for part in path.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }

    /// Get a string value from the event data.
    #[must_use]
    pub fn get_str(&self, path: &str) -> Option<&str> {
        self.get(path)?.as_str()
    }

    /// Get an i64 value from the event data.
    #[must_use]
    pub fn get_i64(&self, path: &str) -> Option<i64> {
        self.get(path)?.as_i64()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_data_path_access() {
        let payload = VerifiedPayload {
            event: json!("contact.created"),
            timestamp: json!(1_700_000_000),
            data: json!({"contact": {"id": "c_1", "age": 7}}),
            delivery_id: String::new(),
        };

        assert_eq!(payload.event_str(), Some("contact.created"));
        assert_eq!(payload.timestamp_i64(), Some(1_700_000_000));
        assert_eq!(payload.get_str("contact.id"), Some("c_1"));
        assert_eq!(payload.get_i64("contact.age"), Some(7));
        assert!(payload.get("contact.missing").is_none());
    }

    #[test]
    fn test_untyped_fields_pass_through() {
        // The sender controls field types; nothing beyond key presence is
        // enforced.
        let payload = VerifiedPayload {
            event: json!(42),
            timestamp: json!("soon"),
            data: Value::Null,
            delivery_id: "d_1".to_string(),
        };

        assert_eq!(payload.event_str(), None);
        assert_eq!(payload.timestamp_i64(), None);
        assert_eq!(payload.data, Value::Null);
    }
}
