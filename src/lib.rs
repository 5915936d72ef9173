//! Estante
//!
//! Client-side synchronizer for a remote library-book catalog. The crate
//! holds the canonical local copy of the collection, issues CRUD-style
//! requests against the remote API, reconciles the local state with each
//! server-confirmed result, and surfaces failures as a single user-facing
//! message.
//!
//! # Modules
//!
//! - `catalog`: Book record, form draft, and the collection state container
//! - `api`: Transport seam (trait + reqwest implementation)
//! - `sync`: The synchronizer driving the six operations
//! - `config`: Remote endpoint configuration

pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod sync;

pub use api::{BooksApi, HttpBooksApi};
pub use catalog::{BookDraft, BookFields, BookRecord, CollectionState};
pub use config::Config;
pub use error::{ApiError, Result, SyncError};
pub use sync::Synchronizer;
