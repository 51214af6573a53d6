//! Domain types and request/response models for the book API
//!
//! Request and response DTOs are kept separate from the persisted `Book`.

pub mod book;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use book::{Book, NewBook};
pub use requests::BookRequest;
pub use responses::{
    BookMutationResponse, BookResponse, BooksResponse, ErrorResponse, HealthResponse,
    MessageResponse, StatsResponse,
};
