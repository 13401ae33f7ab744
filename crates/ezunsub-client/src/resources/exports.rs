//! Contact export jobs.

use reqwest::Method;
use serde_json::Value;

use crate::{
    client::EzUnsubClient,
    error::Result,
    types::{CreateExportRequest, Page},
};

/// Exports API.
#[derive(Debug)]
pub struct Exports<'a> {
    client: &'a EzUnsubClient,
}

impl<'a> Exports<'a> {
    pub(crate) const fn new(client: &'a EzUnsubClient) -> Self {
        Self { client }
    }

    /// List export jobs.
    pub async fn list(&self, page: Page) -> Result<Value> {
        self.client
            .request(Method::GET, "/api/exports", None, Some(&page.query()))
            .await
    }

    /// Get an export job by ID.
    pub async fn get(&self, export_id: &str) -> Result<Value> {
        self.client
            .request(Method::GET, &format!("/api/exports/{export_id}"), None, None)
            .await
    }

    /// Create an export job.
    pub async fn create(&self, request: CreateExportRequest) -> Result<Value> {
        let body = serde_json::to_value(&request)?;

        self.client
            .request(Method::POST, "/api/exports", Some(&body), None)
            .await
    }
}
