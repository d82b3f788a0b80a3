// web_app/api/client.rs - reqwest implementation of ProductApi
//
// Works natively and on wasm32 (reqwest uses the browser's fetch there).
// Non-2xx responses become `ApiError::Status`; mutation responses are
// checked for status only.

use reqwest::{Client, RequestBuilder, Response};

use super::{ApiError, CredentialProvider, ProductApi};
use crate::web_app::config::ApiConfig;
use crate::web_app::model::{Product, ProductId, ProductInput, ProductList};

/// HTTP client for the products API
#[derive(Clone, Debug)]
pub struct HttpProductApi<C> {
    client: Client,
    base_url: String,
    credentials: C,
}

impl<C: CredentialProvider> HttpProductApi<C> {
    pub fn new(config: &ApiConfig, credentials: C) -> Self {
        Self::with_client(Client::new(), config, credentials)
    }

    pub fn with_client(client: Client, config: &ApiConfig, credentials: C) -> Self {
        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            credentials,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn credentials(&self) -> &C {
        &self.credentials
    }

    pub fn products_url(&self) -> String {
        format!("{}/api/products", self.base_url)
    }

    pub fn product_url(&self, id: &ProductId) -> String {
        format!("{}/api/products/{}", self.base_url, id)
    }

    fn authorized(&self, request: RequestBuilder) -> Result<RequestBuilder, ApiError> {
        let token = self
            .credentials
            .bearer_token()
            .ok_or(ApiError::MissingCredential)?;
        Ok(request.bearer_auth(token))
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let response = self.authorized(request)?.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        tracing::debug!("Products API returned {}: {}", status, body);
        Err(ApiError::Status {
            status: status.as_u16(),
            body,
        })
    }
}

impl<C: CredentialProvider> ProductApi for HttpProductApi<C> {
    async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        let response = self.send(self.client.get(self.products_url())).await?;
        let list: ProductList = response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(list.data)
    }

    async fn create_product(&self, input: &ProductInput) -> Result<(), ApiError> {
        self.send(self.client.post(self.products_url()).json(input))
            .await
            .map(|_| ())
    }

    async fn update_product(&self, id: &ProductId, input: &ProductInput) -> Result<(), ApiError> {
        self.send(self.client.put(self.product_url(id)).json(input))
            .await
            .map(|_| ())
    }

    async fn delete_product(&self, id: &ProductId) -> Result<(), ApiError> {
        self.send(self.client.delete(self.product_url(id)))
            .await
            .map(|_| ())
    }
}
