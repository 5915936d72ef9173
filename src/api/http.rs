//! reqwest-backed implementation of the catalog API

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde_json::Value;

use crate::catalog::{BookFields, BookRecord};
use crate::config::Config;
use crate::error::ApiError;

use super::BooksApi;

/// HTTP client for the remote catalog.
///
/// Every call is a single request/response exchange: no retries, no timeout,
/// no cancellation. A non-2xx status is reported as [`ApiError::Status`]
/// without surfacing the server's error body.
pub struct HttpBooksApi {
    client: Client,
    base_url: String,
}

impl HttpBooksApi {
    pub fn new(config: &Config) -> Self {
        Self {
            client: Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn check(operation: &'static str, response: Response) -> Result<Response, ApiError> {
        if response.status().is_success() {
            Ok(response)
        } else {
            Err(ApiError::Status {
                operation,
                status: response.status(),
            })
        }
    }
}

#[async_trait]
impl BooksApi for HttpBooksApi {
    async fn list(&self) -> Result<Vec<BookRecord>, ApiError> {
        tracing::debug!("GET /api/books");
        let response = self.client.get(self.url("/api/books")).send().await?;
        let body: Value = Self::check("list", response)?.json().await?;

        // A successful but non-array body is served as an empty catalog
        match body {
            Value::Array(_) => Ok(serde_json::from_value(body)?),
            _ => Ok(Vec::new()),
        }
    }

    async fn add(&self, fields: &BookFields) -> Result<BookRecord, ApiError> {
        tracing::debug!("POST /api/add ({})", fields.title);
        let response = self
            .client
            .post(self.url("/api/add"))
            .json(fields)
            .send()
            .await?;
        Ok(Self::check("add", response)?.json().await?)
    }

    async fn borrow(&self, id: i64) -> Result<BookRecord, ApiError> {
        tracing::debug!("GET /api/borrow?id={}", id);
        let response = self
            .client
            .get(self.url(&format!("/api/borrow?id={}", id)))
            .send()
            .await?;
        Ok(Self::check("borrow", response)?.json().await?)
    }

    async fn return_book(&self, id: i64) -> Result<BookRecord, ApiError> {
        tracing::debug!("GET /api/return?id={}", id);
        let response = self
            .client
            .get(self.url(&format!("/api/return?id={}", id)))
            .send()
            .await?;
        Ok(Self::check("return", response)?.json().await?)
    }

    async fn delete(&self, id: i64) -> Result<(), ApiError> {
        tracing::debug!("DELETE /api/delete?id={}", id);
        let response = self
            .client
            .delete(self.url(&format!("/api/delete?id={}", id)))
            .send()
            .await?;
        Self::check("delete", response)?;
        Ok(())
    }

    async fn update(&self, id: i64, fields: &BookFields) -> Result<BookRecord, ApiError> {
        tracing::debug!("PUT /api/update?id={}", id);
        let response = self
            .client
            .put(self.url(&format!("/api/update?id={}", id)))
            .json(fields)
            .send()
            .await?;
        Ok(Self::check("update", response)?.json().await?)
    }
}
