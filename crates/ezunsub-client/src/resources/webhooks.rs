//! Webhook subscription management.
//!
//! This manages subscriptions on the EZUnsub side. Verifying inbound
//! deliveries is the `ezunsub-webhook` crate's job.

use reqwest::Method;
use serde_json::Value;

use crate::{
    client::EzUnsubClient,
    error::Result,
    types::{CreateWebhookRequest, UpdateWebhookRequest},
};

/// Webhooks API.
#[derive(Debug)]
pub struct Webhooks<'a> {
    client: &'a EzUnsubClient,
}

impl<'a> Webhooks<'a> {
    pub(crate) const fn new(client: &'a EzUnsubClient) -> Self {
        Self { client }
    }

    /// List webhooks, optionally scoped to an organization (admin only).
    pub async fn list(&self, org_id: Option<&str>) -> Result<Value> {
        let query = org_id.map(|id| vec![("orgId", id.to_string())]);

        self.client
            .request(Method::GET, "/api/webhooks", None, query.as_deref())
            .await
    }

    /// Get a webhook by ID.
    pub async fn get(&self, webhook_id: &str) -> Result<Value> {
        self.client
            .request(Method::GET, &format!("/api/webhooks/{webhook_id}"), None, None)
            .await
    }

    /// Create a webhook. The response carries the signing secret; it is
    /// shown only once.
    pub async fn create(&self, request: CreateWebhookRequest) -> Result<Value> {
        let body = serde_json::to_value(&request)?;

        self.client
            .request(Method::POST, "/api/webhooks", Some(&body), None)
            .await
    }

    /// Update a webhook.
    pub async fn update(&self, webhook_id: &str, request: UpdateWebhookRequest) -> Result<Value> {
        let body = serde_json::to_value(&request)?;

        self.client
            .request(
                Method::PATCH,
                &format!("/api/webhooks/{webhook_id}"),
                Some(&body),
                None,
            )
            .await
    }

    /// Delete a webhook.
    pub async fn delete(&self, webhook_id: &str) -> Result<Value> {
        self.client
            .request(
                Method::DELETE,
                &format!("/api/webhooks/{webhook_id}"),
                None,
                None,
            )
            .await
    }

    /// Rotate the signing secret. The response carries the new secret.
    pub async fn rotate_secret(&self, webhook_id: &str) -> Result<Value> {
        self.client
            .request(
                Method::POST,
                &format!("/api/webhooks/{webhook_id}/rotate-secret"),
                None,
                None,
            )
            .await
    }

    /// Send a test delivery to the webhook's URL.
    pub async fn test(&self, webhook_id: &str) -> Result<Value> {
        self.client
            .request(
                Method::POST,
                &format!("/api/webhooks/{webhook_id}/test"),
                None,
                None,
            )
            .await
    }

    /// Get delivery history for a webhook.
    pub async fn deliveries(&self, webhook_id: &str, limit: u32, offset: u32) -> Result<Value> {
        let query = [
            ("limit", limit.to_string()),
            ("offset", offset.to_string()),
        ];

        self.client
            .request(
                Method::GET,
                &format!("/api/webhooks/{webhook_id}/deliveries"),
                None,
                Some(&query),
            )
            .await
    }

    /// List the event types available for subscription.
    pub async fn events(&self) -> Result<Value> {
        self.client
            .request(Method::GET, "/api/webhooks/events/list", None, None)
            .await
    }
}
