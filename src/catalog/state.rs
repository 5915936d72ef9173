//! Collection state container
//!
//! Explicit holder for the local copy of the remote collection plus the two
//! user-facing flags. All writes go through the reconciliation helpers here,
//! which keep the one-record-per-id invariant.

use super::book::{BookDraft, BookRecord};

/// Local catalog state: the items, the pending create form, the most recent
/// failure message, and the initial-load flag.
#[derive(Debug, Clone)]
pub struct CollectionState {
    items: Vec<BookRecord>,
    draft: BookDraft,
    last_error: Option<String>,
    is_loading: bool,
}

impl CollectionState {
    /// Fresh state: empty catalog, loading until the initial fetch completes
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            draft: BookDraft::default(),
            last_error: None,
            is_loading: true,
        }
    }

    /// The catalog in display order
    pub fn items(&self) -> &[BookRecord] {
        &self.items
    }

    /// Look up a record by id
    pub fn record(&self, id: i64) -> Option<&BookRecord> {
        self.items.iter().find(|b| b.id == id)
    }

    /// The pending create-form fields
    pub fn draft(&self) -> &BookDraft {
        &self.draft
    }

    /// The most recent failure message, if any
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// True until the initial bulk fetch has completed
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Stage create-form input; retained verbatim until a create succeeds
    pub fn set_draft(&mut self, draft: BookDraft) {
        self.draft = draft;
    }

    /// Replace the catalog wholesale with the server's response sequence
    pub(crate) fn finish_load(&mut self, items: Vec<BookRecord>) {
        self.items = items;
        self.is_loading = false;
    }

    /// Record a failed initial fetch; the catalog stays empty
    pub(crate) fn fail_load(&mut self, message: impl Into<String>) {
        self.last_error = Some(message.into());
        self.is_loading = false;
    }

    /// Record a failed operation
    pub(crate) fn fail(&mut self, message: impl Into<String>) {
        self.last_error = Some(message.into());
    }

    /// Append a server-confirmed record. If the id is somehow already
    /// present the existing record is replaced instead, keeping the
    /// one-record-per-id invariant.
    pub(crate) fn insert(&mut self, record: BookRecord) {
        match self.items.iter_mut().find(|b| b.id == record.id) {
            Some(existing) => *existing = record,
            None => self.items.push(record),
        }
    }

    /// Replace the matching record wholesale with the server's copy.
    /// Records with other ids are untouched; an absent id is a no-op.
    pub(crate) fn replace(&mut self, record: BookRecord) -> bool {
        match self.items.iter_mut().find(|b| b.id == record.id) {
            Some(existing) => {
                *existing = record;
                true
            }
            None => false,
        }
    }

    /// Remove the matching record; an absent id is a no-op
    pub(crate) fn remove(&mut self, id: i64) -> bool {
        let before = self.items.len();
        self.items.retain(|b| b.id != id);
        self.items.len() != before
    }

    pub(crate) fn clear_draft(&mut self) {
        self.draft = BookDraft::default();
    }

    pub(crate) fn clear_error(&mut self) {
        self.last_error = None;
    }
}

impl Default for CollectionState {
    fn default() -> Self {
        Self::new()
    }
}
