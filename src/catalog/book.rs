//! Book types and structures

use serde::{Deserialize, Serialize};

/// A single catalog entry, as the remote authority serves it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookRecord {
    /// Server-assigned identifier, immutable, never reused
    pub id: i64,

    /// Book title
    pub title: String,

    /// Book author
    pub author: String,

    /// Publication year; range is not validated anywhere
    pub year: i32,

    /// Borrow status, mutated only through the borrow/return operations
    pub borrowed: bool,
}

/// Request body for create and update calls
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookFields {
    pub title: String,
    pub author: String,
    pub year: i32,
}

/// Why a draft failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftError {
    /// One of the three fields is empty
    MissingField,
    /// The year field is non-empty but not an integer
    InvalidYear,
}

/// Create/update form fields, raw as entered
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookDraft {
    pub title: String,
    pub author: String,
    pub year: String,
}

impl BookDraft {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        year: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            year: year.into(),
        }
    }

    /// Check the three fields and parse the year.
    ///
    /// All fields must be non-empty and the year must parse as an integer.
    /// A non-numeric year is rejected here rather than forwarded to the
    /// server as an undefined value.
    pub fn validate(&self) -> Result<BookFields, DraftError> {
        if self.title.is_empty() || self.author.is_empty() || self.year.is_empty() {
            return Err(DraftError::MissingField);
        }

        let year = self
            .year
            .trim()
            .parse::<i32>()
            .map_err(|_| DraftError::InvalidYear)?;

        Ok(BookFields {
            title: self.title.clone(),
            author: self.author.clone(),
            year,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_draft_parses_year() {
        let fields = BookDraft::new("Rayuela", "Cortázar", "1963")
            .validate()
            .unwrap();
        assert_eq!(fields.title, "Rayuela");
        assert_eq!(fields.year, 1963);
    }

    #[test]
    fn empty_fields_are_rejected() {
        for draft in [
            BookDraft::new("", "A", "2000"),
            BookDraft::new("T", "", "2000"),
            BookDraft::new("T", "A", ""),
        ] {
            assert_eq!(draft.validate(), Err(DraftError::MissingField));
        }
    }

    #[test]
    fn non_numeric_year_is_rejected() {
        let draft = BookDraft::new("T", "A", "around 1990");
        assert_eq!(draft.validate(), Err(DraftError::InvalidYear));
    }

    #[test]
    fn year_tolerates_surrounding_whitespace() {
        let fields = BookDraft::new("T", "A", " 1984 ").validate().unwrap();
        assert_eq!(fields.year, 1984);
    }
}
