//! Catalog REST API client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::dto::{CreateProductRequest, ErrorResponse, ProductResponse, ReviewRequest};
use crate::domain::entities::{NewProductDraft, Product, ProductId, Review};
use crate::domain::errors::CatalogError;
use crate::domain::ports::CatalogPort;

const USER_AGENT: &str = concat!("revu/", env!("CARGO_PKG_VERSION"));

/// HTTP adapter for the catalog backend.
pub struct RestCatalogClient {
    client: Client,
    base_url: Url,
}

impl RestCatalogClient {
    /// Creates a client without a request timeout.
    ///
    /// # Errors
    /// Returns error if the base URL is invalid or HTTP client creation fails.
    pub fn new(base_url: &str) -> Result<Self, CatalogError> {
        Self::with_timeout(base_url, None)
    }

    /// Creates a client with an optional per-request timeout.
    ///
    /// # Errors
    /// Returns error if the base URL is invalid or HTTP client creation fails.
    pub fn with_timeout(base_url: &str, timeout: Option<Duration>) -> Result<Self, CatalogError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| CatalogError::unexpected(format!("invalid base URL {base_url}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(CatalogError::unexpected(format!(
                "base URL {base_url} cannot carry a path"
            )));
        }

        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| CatalogError::unexpected(format!("failed to create HTTP client: {e}")))?;

        Ok(Self { client, base_url })
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, CatalogError> {
        let response = request.send().await.map_err(|e| {
            warn!(error = %e, "Failed to reach catalog backend");
            if e.is_timeout() {
                CatalogError::network("request timed out")
            } else if e.is_connect() {
                CatalogError::network("failed to connect to catalog backend")
            } else {
                CatalogError::network(e.to_string())
            }
        })?;

        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            Err(Self::handle_error_response(status, response).await)
        }
    }

    async fn handle_error_response(status: StatusCode, response: Response) -> CatalogError {
        let message = match response.json::<ErrorResponse>().await {
            Ok(error) => error.message,
            Err(_) => status
                .canonical_reason()
                .map_or_else(|| format!("HTTP {status}"), ToString::to_string),
        };
        warn!(status = status.as_u16(), message = %message, "Catalog backend rejected request");
        CatalogError::status(status.as_u16(), message)
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, CatalogError> {
        response.json::<T>().await.map_err(|e| {
            warn!(error = %e, "Failed to parse catalog response");
            CatalogError::decode(e.to_string())
        })
    }
}

#[async_trait]
impl CatalogPort for RestCatalogClient {
    async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError> {
        let url = self.endpoint(&["products"]);
        debug!(url = %url, "Fetching product collection");

        let response = self.send(self.client.get(url)).await?;
        let products: Vec<ProductResponse> = Self::decode(response).await?;

        debug!(count = products.len(), "Fetched product collection");
        Ok(products.into_iter().map(Product::from).collect())
    }

    async fn create_product(&self, draft: &NewProductDraft) -> Result<Product, CatalogError> {
        let url = self.endpoint(&["products"]);
        debug!(url = %url, name = %draft.name, "Creating product");

        let body = CreateProductRequest::from(draft);
        let response = self.send(self.client.post(url).json(&body)).await?;
        let product: ProductResponse = Self::decode(response).await?;

        Ok(product.into())
    }

    async fn submit_review(
        &self,
        product_id: &ProductId,
        review: &Review,
    ) -> Result<Product, CatalogError> {
        let url = self.endpoint(&["products", product_id.as_str(), "review"]);
        debug!(url = %url, product_id = %product_id, "Submitting review");

        let body = ReviewRequest::from(review);
        let response = self.send(self.client.post(url).json(&body)).await?;
        let product: ProductResponse = Self::decode(response).await?;

        Ok(product.into())
    }

    async fn delete_product(&self, product_id: &ProductId) -> Result<(), CatalogError> {
        let url = self.endpoint(&["products", product_id.as_str()]);
        debug!(url = %url, product_id = %product_id, "Deleting product");

        self.send(self.client.delete(url)).await?;
        Ok(())
    }
}
