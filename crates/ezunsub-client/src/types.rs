//! Request types shared by the resource facades.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Pagination parameters for list endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    /// 1-based page number.
    pub page: u32,
    /// Items per page. Server caps vary by endpoint (200 for contacts,
    /// 100 for deliveries).
    pub limit: u32,
}

impl Default for Page {
    fn default() -> Self {
        Self { page: 1, limit: 50 }
    }
}

impl Page {
    /// Create pagination parameters.
    #[must_use]
    pub const fn new(page: u32, limit: u32) -> Self {
        Self { page, limit }
    }

    pub(crate) fn query(self) -> Vec<(&'static str, String)> {
        vec![
            ("page", self.page.to_string()),
            ("limit", self.limit.to_string()),
        ]
    }
}

/// How much personally identifiable information webhook payloads carry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PiiMode {
    /// Full contact details.
    Full,
    /// Hashed identifiers only.
    #[default]
    Hashes,
    /// No PII at all.
    None,
}

/// Body for creating a webhook subscription.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWebhookRequest {
    pub name: String,
    /// Delivery URL; the server requires HTTPS.
    pub url: String,
    /// Events to subscribe to, e.g. `"contact.created"`.
    pub events: Vec<String>,
    pub pii_mode: PiiMode,
    /// Organization to attach to (admin only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub org_id: Option<String>,
}

impl CreateWebhookRequest {
    /// Create a request with the default `hashes` PII mode.
    #[must_use]
    pub fn new(name: impl Into<String>, url: impl Into<String>, events: Vec<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            events,
            pii_mode: PiiMode::default(),
            org_id: None,
        }
    }

    /// Set the PII mode.
    #[must_use]
    pub const fn with_pii_mode(mut self, mode: PiiMode) -> Self {
        self.pii_mode = mode;
        self
    }

    /// Attach to an organization (admin only).
    #[must_use]
    pub fn with_org_id(mut self, org_id: impl Into<String>) -> Self {
        self.org_id = Some(org_id.into());
        self
    }
}

/// Body for updating a webhook subscription. Unset fields are left
/// unchanged by the server.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateWebhookRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub events: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pii_mode: Option<PiiMode>,
    /// Enable or disable delivery without deleting the subscription.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// Body for creating an unsubscribe link.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLinkRequest {
    pub offer_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Body for creating an export job.
#[derive(Debug, Clone, Serialize)]
pub struct CreateExportRequest {
    pub name: String,
    /// Export format; only `"csv"` today.
    pub format: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<Value>,
}

impl CreateExportRequest {
    /// Create a CSV export request.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            format: "csv".to_string(),
            filters: None,
        }
    }

    /// Restrict the export with server-side filters.
    #[must_use]
    pub fn with_filters(mut self, filters: Value) -> Self {
        self.filters = Some(filters);
        self
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_create_webhook_request_serialization() {
        let request = CreateWebhookRequest::new(
            "My Webhook",
            "https://my-app.com/hooks",
            vec!["contact.created".to_string()],
        );

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "name": "My Webhook",
                "url": "https://my-app.com/hooks",
                "events": ["contact.created"],
                "piiMode": "hashes",
            })
        );
    }

    #[test]
    fn test_create_webhook_request_with_org() {
        let request = CreateWebhookRequest::new("W", "https://x", vec![])
            .with_pii_mode(PiiMode::None)
            .with_org_id("org_1");

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["piiMode"], "none");
        assert_eq!(value["orgId"], "org_1");
    }

    #[test]
    fn test_update_webhook_request_skips_unset_fields() {
        let request = UpdateWebhookRequest {
            is_active: Some(false),
            ..UpdateWebhookRequest::default()
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value, json!({"isActive": false}));
    }

    #[test]
    fn test_page_defaults() {
        let page = Page::default();
        assert_eq!(page.page, 1);
        assert_eq!(page.limit, 50);
    }
}
