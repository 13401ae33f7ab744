//! Header extraction for inbound webhook requests.

use crate::{WebhookError, WebhookResult};

/// Webhook headers normalized from a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookHeaders {
    /// Value of `X-Webhook-Signature`.
    pub signature: String,

    /// Value of `X-Webhook-Timestamp`, as literal header text.
    pub timestamp: String,

    /// Value of `X-Webhook-Event`, empty if absent. Informational only.
    pub event: String,

    /// Value of `X-Webhook-Delivery-Id`, empty if absent.
    pub delivery_id: String,
}

/// Extract webhook headers from an arbitrary header collection.
///
/// Names are matched case-insensitively. When a header appears more than
/// once (a multi-valued collection flattens to repeated pairs), the first
/// value wins. No signature or payload validation happens here; run
/// [`crate::WebhookVerifier::verify_and_parse`] on the result.
///
/// # Errors
/// Returns [`WebhookError::MissingHeader`] when `X-Webhook-Signature` or
/// `X-Webhook-Timestamp` is absent.
pub fn extract_headers<I, K, V>(headers: I) -> WebhookResult<WebhookHeaders>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut signature = None;
    let mut timestamp = None;
    let mut event = None;
    let mut delivery_id = None;

    for (name, value) in headers {
        let slot = match name.as_ref().to_ascii_lowercase().as_str() {
            "x-webhook-signature" => &mut signature,
            "x-webhook-timestamp" => &mut timestamp,
            "x-webhook-event" => &mut event,
            "x-webhook-delivery-id" => &mut delivery_id,
            _ => continue,
        };
        if slot.is_none() {
            *slot = Some(value.as_ref().to_string());
        }
    }

    Ok(WebhookHeaders {
        signature: signature.ok_or(WebhookError::MissingHeader("X-Webhook-Signature"))?,
        timestamp: timestamp.ok_or(WebhookError::MissingHeader("X-Webhook-Timestamp"))?,
        event: event.unwrap_or_default(),
        delivery_id: delivery_id.unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn test_extract_headers() {
        let headers = HashMap::from([
            ("X-Webhook-Signature".to_string(), "sha256=abc".to_string()),
            ("X-Webhook-Timestamp".to_string(), "1700000000".to_string()),
            ("X-Webhook-Event".to_string(), "contact.created".to_string()),
            ("X-Webhook-Delivery-Id".to_string(), "d_1".to_string()),
        ]);

        let extracted = extract_headers(&headers).unwrap();
        assert_eq!(extracted.signature, "sha256=abc");
        assert_eq!(extracted.timestamp, "1700000000");
        assert_eq!(extracted.event, "contact.created");
        assert_eq!(extracted.delivery_id, "d_1");
    }

    #[test]
    fn test_case_insensitive_names() {
        let headers = [
            ("X-WEBHOOK-SIGNATURE", "abc"),
            ("x-webhook-timestamp", "1700000000"),
        ];

        let extracted = extract_headers(headers).unwrap();
        assert_eq!(extracted.signature, "abc");
        assert_eq!(extracted.timestamp, "1700000000");
    }

    #[test]
    fn test_optional_headers_default_empty() {
        let headers = [("x-webhook-signature", "abc"), ("x-webhook-timestamp", "1")];

        let extracted = extract_headers(headers).unwrap();
        assert_eq!(extracted.event, "");
        assert_eq!(extracted.delivery_id, "");
    }

    #[test]
    fn test_first_value_wins_for_duplicates() {
        let headers = [
            ("x-webhook-signature", "first"),
            ("X-Webhook-Signature", "second"),
            ("x-webhook-timestamp", "1700000000"),
        ];

        let extracted = extract_headers(headers).unwrap();
        assert_eq!(extracted.signature, "first");
    }

    #[test]
    fn test_missing_signature_header() {
        let headers: [(&str, &str); 0] = [];

        let err = extract_headers(headers).unwrap_err();
        assert!(matches!(
            err,
            WebhookError::MissingHeader("X-Webhook-Signature")
        ));
    }

    #[test]
    fn test_missing_timestamp_header() {
        let headers = [("x-webhook-signature", "abc")];

        let err = extract_headers(headers).unwrap_err();
        assert!(matches!(
            err,
            WebhookError::MissingHeader("X-Webhook-Timestamp")
        ));
    }
}
