//! Offer lookups.

use reqwest::Method;
use serde_json::Value;

use crate::{client::EzUnsubClient, error::Result, types::Page};

/// Offers API.
#[derive(Debug)]
pub struct Offers<'a> {
    client: &'a EzUnsubClient,
}

impl<'a> Offers<'a> {
    pub(crate) const fn new(client: &'a EzUnsubClient) -> Self {
        Self { client }
    }

    /// List offers.
    pub async fn list(&self, page: Page) -> Result<Value> {
        self.client
            .request(Method::GET, "/api/offers", None, Some(&page.query()))
            .await
    }

    /// Get an offer by ID.
    pub async fn get(&self, offer_id: &str) -> Result<Value> {
        self.client
            .request(Method::GET, &format!("/api/offers/{offer_id}"), None, None)
            .await
    }
}
