//! HTTP client for the product API.
//!
//! Thin `reqwest` wrapper around the four REST operations. Bodies are
//! decoded from text rather than straight into JSON so that a transport
//! failure, a non-success status, and a malformed body each surface as
//! their own error variant.

use reqwest::Client;

use crate::{
    entities::Product,
    errors::{Error, Result},
};

use super::ProductApi;

/// Path of the product collection under the server base URL.
const COLLECTION_PATH: &str = "/api/products";

/// `reqwest`-backed implementation of [`ProductApi`].
#[derive(Debug, Clone)]
pub struct HttpProductApi {
    client: Client,
    collection_url: String,
}

impl HttpProductApi {
    /// Creates a client addressing `/api/products` under `base_url`,
    /// e.g. `http://localhost:8080`.
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            collection_url: format!("{}{COLLECTION_PATH}", base_url.trim_end_matches('/')),
        }
    }

    fn item_url(&self, id: i64) -> String {
        format!("{}/{id}", self.collection_url)
    }

    /// Checks the status, then decodes the body as `T`.
    async fn decode<T: serde::de::DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let url = response.url().to_string();
        let status = response.status();
        if !status.is_success() {
            return Err(Error::UnexpectedStatus {
                status: status.as_u16(),
                url,
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(Into::into)
    }
}

#[async_trait::async_trait]
impl ProductApi for HttpProductApi {
    async fn list(&self) -> Result<Vec<Product>> {
        let response = self.client.get(&self.collection_url).send().await?;
        Self::decode(response).await
    }

    async fn create(&self, product: &Product) -> Result<Product> {
        let response = self
            .client
            .post(&self.collection_url)
            .json(product)
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn update(&self, id: i64, product: &Product) -> Result<Product> {
        let response = self
            .client
            .put(self.item_url(id))
            .json(product)
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn delete(&self, id: i64) -> Result<()> {
        let response = self.client.delete(self.item_url(id)).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::UnexpectedStatus {
                status: status.as_u16(),
                url: response.url().to_string(),
            });
        }
        Ok(())
    }
}
