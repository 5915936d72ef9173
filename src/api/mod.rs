//! Transport seam for the remote catalog API
//!
//! One trait method per remote operation, so the synchronizer can be driven
//! against the real HTTP backend or a mock in tests.

mod http;

pub use http::HttpBooksApi;

use async_trait::async_trait;

use crate::catalog::{BookFields, BookRecord};
use crate::error::ApiError;

/// Remote catalog operations
#[async_trait]
pub trait BooksApi: Send + Sync {
    /// GET /api/books — the full collection
    async fn list(&self) -> Result<Vec<BookRecord>, ApiError>;

    /// POST /api/add — create a record, id assigned by the server
    async fn add(&self, fields: &BookFields) -> Result<BookRecord, ApiError>;

    /// GET /api/borrow?id={id} — mark a record borrowed
    async fn borrow(&self, id: i64) -> Result<BookRecord, ApiError>;

    /// GET /api/return?id={id} — mark a record available again
    async fn return_book(&self, id: i64) -> Result<BookRecord, ApiError>;

    /// DELETE /api/delete?id={id} — remove a record; response body ignored
    async fn delete(&self, id: i64) -> Result<(), ApiError>;

    /// PUT /api/update?id={id} — replace a record's editable fields
    async fn update(&self, id: i64, fields: &BookFields) -> Result<BookRecord, ApiError>;
}
