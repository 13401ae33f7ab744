//! Unsubscribe link management.

use reqwest::Method;
use serde_json::Value;

use crate::{
    client::EzUnsubClient,
    error::Result,
    types::{CreateLinkRequest, Page},
};

/// Links API.
#[derive(Debug)]
pub struct Links<'a> {
    client: &'a EzUnsubClient,
}

impl<'a> Links<'a> {
    pub(crate) const fn new(client: &'a EzUnsubClient) -> Self {
        Self { client }
    }

    /// List unsubscribe links, optionally filtered by offer.
    pub async fn list(&self, page: Page, offer_id: Option<&str>) -> Result<Value> {
        let mut query = page.query();
        if let Some(id) = offer_id {
            query.push(("offerId", id.to_string()));
        }

        self.client
            .request(Method::GET, "/api/links", None, Some(&query))
            .await
    }

    /// Get a link by code.
    pub async fn get(&self, code: &str) -> Result<Value> {
        self.client
            .request(Method::GET, &format!("/api/links/{code}"), None, None)
            .await
    }

    /// Create an unsubscribe link for an offer.
    pub async fn create(&self, offer_id: &str, name: Option<&str>) -> Result<Value> {
        let request = CreateLinkRequest {
            offer_id: offer_id.to_string(),
            name: name.map(ToOwned::to_owned),
        };
        let body = serde_json::to_value(&request)?;

        self.client
            .request(Method::POST, "/api/links", Some(&body), None)
            .await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::EzUnsubClient;

    #[tokio::test]
    async fn test_create_omits_absent_name() {
        let server = MockServer::start().await;
        let client = EzUnsubClient::new("test_api_key")
            .unwrap()
            .with_base_url(server.uri());

        Mock::given(method("POST"))
            .and(path("/api/links"))
            .and(body_json(json!({"offerId": "o_1"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"code": "abc123"})))
            .mount(&server)
            .await;

        let link = client.links().create("o_1", None).await.unwrap();
        assert_eq!(link["code"], "abc123");
    }
}
