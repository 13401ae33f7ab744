//! Contact management.

use reqwest::Method;
use serde_json::Value;

use crate::{client::EzUnsubClient, error::Result, types::Page};

/// Contacts API.
#[derive(Debug)]
pub struct Contacts<'a> {
    client: &'a EzUnsubClient,
}

impl<'a> Contacts<'a> {
    pub(crate) const fn new(client: &'a EzUnsubClient) -> Self {
        Self { client }
    }

    /// List contacts, optionally filtered by link code.
    pub async fn list(&self, page: Page, link_code: Option<&str>) -> Result<Value> {
        let mut query = page.query();
        if let Some(code) = link_code {
            query.push(("linkCode", code.to_string()));
        }

        self.client
            .request(Method::GET, "/api/contacts", None, Some(&query))
            .await
    }

    /// Get a contact by ID.
    pub async fn get(&self, contact_id: &str) -> Result<Value> {
        self.client
            .request(Method::GET, &format!("/api/contacts/{contact_id}"), None, None)
            .await
    }

    /// Delete a contact (admin only).
    pub async fn delete(&self, contact_id: &str) -> Result<Value> {
        self.client
            .request(
                Method::DELETE,
                &format!("/api/contacts/{contact_id}"),
                None,
                None,
            )
            .await
    }

    /// Get contact statistics.
    pub async fn stats(&self) -> Result<Value> {
        self.client
            .request(Method::GET, "/api/contacts/stats", None, None)
            .await
    }
}
