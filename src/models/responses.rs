//! Response DTOs for the book API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::cache::CacheStats;
use crate::models::Book;

/// Response body for GET /books
#[derive(Debug, Clone, Serialize)]
pub struct BooksResponse {
    pub books: Vec<Book>,
}

/// Response body for GET /books/:id
#[derive(Debug, Clone, Serialize)]
pub struct BookResponse {
    pub book: Book,
}

/// Response body for POST /books and PUT /books/:id
#[derive(Debug, Clone, Serialize)]
pub struct BookMutationResponse {
    pub message: String,
    pub book: Book,
}

impl BookMutationResponse {
    pub fn added(book: Book) -> Self {
        Self {
            message: "Book added".to_string(),
            book,
        }
    }

    pub fn updated(book: Book) -> Self {
        Self {
            message: "Book updated".to_string(),
            book,
        }
    }
}

/// Response body for DELETE /books/:id
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn deleted() -> Self {
        Self {
            message: "Book deleted".to_string(),
        }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Whether the list cache is active
    pub enabled: bool,
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
    pub invalidations: u64,
    pub total_entries: usize,
    /// hits / (hits + misses)
    pub hit_rate: f64,
}

impl StatsResponse {
    pub fn from_stats(stats: &CacheStats) -> Self {
        Self {
            enabled: true,
            hits: stats.hits,
            misses: stats.misses,
            evictions: stats.evictions,
            invalidations: stats.invalidations,
            total_entries: stats.total_entries,
            hit_rate: stats.hit_rate(),
        }
    }

    /// Reported when the service runs without a cache.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::from_stats(&CacheStats::default())
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewBook;

    fn dune() -> Book {
        NewBook::new("Dune", "Herbert", "1965").into_book(1)
    }

    #[test]
    fn test_books_response_shape() {
        let json = serde_json::to_value(BooksResponse { books: vec![dune()] }).unwrap();
        assert_eq!(json["books"][0]["title"], "Dune");
    }

    #[test]
    fn test_added_response_shape() {
        let json = serde_json::to_value(BookMutationResponse::added(dune())).unwrap();
        assert_eq!(json["message"], "Book added");
        assert_eq!(json["book"]["id"], 1);
    }

    #[test]
    fn test_deleted_response_has_no_book() {
        let json = serde_json::to_value(MessageResponse::deleted()).unwrap();
        assert_eq!(json["message"], "Book deleted");
        assert!(json.get("book").is_none());
    }

    #[test]
    fn test_stats_response_hit_rate() {
        let stats = CacheStats {
            hits: 8,
            misses: 2,
            ..CacheStats::default()
        };
        let resp = StatsResponse::from_stats(&stats);
        assert!(resp.enabled);
        assert!((resp.hit_rate - 0.8).abs() < 0.001);
    }

    #[test]
    fn test_stats_response_disabled() {
        let resp = StatsResponse::disabled();
        assert!(!resp.enabled);
        assert_eq!(resp.hits, 0);
    }

    #[test]
    fn test_health_response_serialize() {
        let json = serde_json::to_string(&HealthResponse::healthy()).unwrap();
        assert!(json.contains("healthy"));
        assert!(json.contains("timestamp"));
    }

    #[test]
    fn test_error_response_serialize() {
        let json = serde_json::to_value(ErrorResponse::new("Book not found")).unwrap();
        assert_eq!(json["error"], "Book not found");
    }
}
