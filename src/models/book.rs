//! Book domain types shared by the store, the cache and the API.

use serde::{Deserialize, Serialize};

// == Book ==
/// A persisted book record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Book {
    /// Store-assigned identifier, never reused
    pub id: i64,
    pub title: String,
    pub author: String,
    /// Opaque text, stored as received
    pub published_date: String,
}

// == New Book ==
/// The mutable fields of a book, already validated.
///
/// Used for both creation and full replacement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub published_date: String,
}

impl NewBook {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        published_date: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            published_date: published_date.into(),
        }
    }

    /// Materializes the record stored under `id`.
    pub fn into_book(self, id: i64) -> Book {
        Book {
            id,
            title: self.title,
            author: self.author,
            published_date: self.published_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_serializes_all_fields() {
        let book = NewBook::new("Dune", "Herbert", "1965").into_book(7);
        let json = serde_json::to_value(&book).unwrap();

        assert_eq!(json["id"], 7);
        assert_eq!(json["title"], "Dune");
        assert_eq!(json["author"], "Herbert");
        assert_eq!(json["published_date"], "1965");
    }
}
