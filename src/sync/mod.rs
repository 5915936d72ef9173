//! Collection synchronizer
//!
//! Keeps the local catalog copy consistent with the remote authority through
//! six request/response operations, reconciling the state after each
//! server-confirmed mutation. Every failure stays local to its operation: it
//! records a fixed user-facing message and returns, never blocking or
//! invalidating another operation.

mod locks;

use std::sync::Arc;

use parking_lot::RwLock;

use crate::api::{BooksApi, HttpBooksApi};
use crate::catalog::{BookDraft, BookRecord, CollectionState, DraftError};
use crate::config::Config;
use crate::error::{Result, SyncError};

use locks::IdLocks;

// Fixed user-facing failure messages, one per operation. The server's error
// body is never surfaced.
const MSG_LOAD: &str = "Failed to fetch books";
const MSG_CREATE: &str = "Failed to add book";
const MSG_BORROW: &str = "Failed to borrow book";
const MSG_RETURN: &str = "Failed to return book";
const MSG_DELETE: &str = "Failed to delete book";
const MSG_UPDATE: &str = "Failed to update book";
const MSG_MISSING_FIELDS: &str = "Please fill in all fields";
const MSG_BAD_YEAR: &str = "Year must be a whole number";
const MSG_UPDATE_INPUT: &str = "Update cancelled or invalid input";

/// The collection synchronizer.
///
/// Cheap to clone; all clones share the same state and per-id locks.
#[derive(Clone)]
pub struct Synchronizer {
    inner: Arc<Inner>,
}

struct Inner {
    api: Arc<dyn BooksApi>,
    state: RwLock<CollectionState>,
    locks: IdLocks,
}

impl Synchronizer {
    /// Synchronizer talking HTTP to the configured remote
    pub fn new(config: &Config) -> Self {
        Self::with_api(Arc::new(HttpBooksApi::new(config)))
    }

    /// Synchronizer over any transport implementation
    pub fn with_api(api: Arc<dyn BooksApi>) -> Self {
        Self {
            inner: Arc::new(Inner {
                api,
                state: RwLock::new(CollectionState::new()),
                locks: IdLocks::new(),
            }),
        }
    }

    /// Snapshot of the current catalog, in display order
    pub fn books(&self) -> Vec<BookRecord> {
        self.inner.state.read().items().to_vec()
    }

    /// Snapshot of a single record, for pre-populating an edit form
    pub fn book(&self, id: i64) -> Option<BookRecord> {
        self.inner.state.read().record(id).cloned()
    }

    /// The most recent failure message. Displayed until overwritten; only a
    /// successful create clears it.
    pub fn last_error(&self) -> Option<String> {
        self.inner.state.read().last_error().map(str::to_string)
    }

    /// True until the initial bulk fetch has completed
    pub fn is_loading(&self) -> bool {
        self.inner.state.read().is_loading()
    }

    /// The pending create-form fields
    pub fn draft(&self) -> BookDraft {
        self.inner.state.read().draft().clone()
    }

    /// Stage create-form input; kept verbatim until a create succeeds
    pub fn set_draft(&self, draft: BookDraft) {
        self.inner.state.write().set_draft(draft);
    }

    /// Initial bulk fetch of the collection.
    ///
    /// On success the catalog is replaced wholesale with the server's
    /// sequence. On failure the catalog stays empty and the load message is
    /// recorded. Either way the loading flag clears. Intended to run once at
    /// session start; repeating it against an unchanged remote yields the
    /// same catalog.
    pub async fn load(&self) -> Result<()> {
        match self.inner.api.list().await {
            Ok(items) => {
                self.inner.state.write().finish_load(items);
                Ok(())
            }
            Err(err) => {
                tracing::warn!("load failed: {}", err);
                self.inner.state.write().fail_load(MSG_LOAD);
                Err(err.into())
            }
        }
    }

    /// Create a record from the three form fields.
    ///
    /// An empty field or non-numeric year fails locally with zero network
    /// calls. On success the server-returned record (carrying the assigned
    /// id) is appended, and both the staged draft and the error slot clear.
    /// On failure the catalog and the staged draft are left untouched.
    pub async fn create(&self, title: &str, author: &str, year_text: &str) -> Result<BookRecord> {
        let fields = match BookDraft::new(title, author, year_text).validate() {
            Ok(fields) => fields,
            Err(reason) => {
                let message = match reason {
                    DraftError::MissingField => MSG_MISSING_FIELDS,
                    DraftError::InvalidYear => MSG_BAD_YEAR,
                };
                self.inner.state.write().fail(message);
                return Err(SyncError::Validation(message.to_string()));
            }
        };

        match self.inner.api.add(&fields).await {
            Ok(record) => {
                let mut state = self.inner.state.write();
                state.insert(record.clone());
                state.clear_draft();
                state.clear_error();
                Ok(record)
            }
            Err(err) => {
                tracing::warn!("create failed: {}", err);
                self.inner.state.write().fail(MSG_CREATE);
                Err(err.into())
            }
        }
    }

    /// Mark a record borrowed.
    ///
    /// Whether the record is currently unborrowed is not checked here; that
    /// invariant belongs to the server.
    pub async fn borrow(&self, id: i64) -> Result<BookRecord> {
        let lock = self.inner.locks.for_id(id);
        let _serialized = lock.lock().await;

        match self.inner.api.borrow(id).await {
            Ok(record) => {
                self.inner.state.write().replace(record.clone());
                Ok(record)
            }
            Err(err) => {
                tracing::warn!("borrow {} failed: {}", id, err);
                self.inner.state.write().fail(MSG_BORROW);
                Err(err.into())
            }
        }
    }

    /// Mark a record available again
    pub async fn return_book(&self, id: i64) -> Result<BookRecord> {
        let lock = self.inner.locks.for_id(id);
        let _serialized = lock.lock().await;

        match self.inner.api.return_book(id).await {
            Ok(record) => {
                self.inner.state.write().replace(record.clone());
                Ok(record)
            }
            Err(err) => {
                tracing::warn!("return {} failed: {}", id, err);
                self.inner.state.write().fail(MSG_RETURN);
                Err(err.into())
            }
        }
    }

    /// Remove a record from the catalog
    pub async fn delete(&self, id: i64) -> Result<()> {
        let lock = self.inner.locks.for_id(id);
        let _serialized = lock.lock().await;

        match self.inner.api.delete(id).await {
            Ok(()) => {
                self.inner.state.write().remove(id);
                Ok(())
            }
            Err(err) => {
                tracing::warn!("delete {} failed: {}", id, err);
                self.inner.state.write().fail(MSG_DELETE);
                Err(err.into())
            }
        }
    }

    /// Replace a record's editable fields.
    ///
    /// The caller collects the three values, pre-populated from the current
    /// record via [`Synchronizer::book`], and submits them here. An empty
    /// field or non-numeric year aborts before any request is issued, which
    /// also covers a cancelled edit.
    pub async fn update(
        &self,
        id: i64,
        title: &str,
        author: &str,
        year_text: &str,
    ) -> Result<BookRecord> {
        let fields = match BookDraft::new(title, author, year_text).validate() {
            Ok(fields) => fields,
            Err(_) => {
                self.inner.state.write().fail(MSG_UPDATE_INPUT);
                return Err(SyncError::Validation(MSG_UPDATE_INPUT.to_string()));
            }
        };

        let lock = self.inner.locks.for_id(id);
        let _serialized = lock.lock().await;

        match self.inner.api.update(id, &fields).await {
            Ok(record) => {
                self.inner.state.write().replace(record.clone());
                Ok(record)
            }
            Err(err) => {
                tracing::warn!("update {} failed: {}", id, err);
                self.inner.state.write().fail(MSG_UPDATE);
                Err(err.into())
            }
        }
    }
}
