//! Catalog data model and local state

mod book;
mod state;

pub use book::{BookDraft, BookFields, BookRecord, DraftError};
pub use state::CollectionState;
