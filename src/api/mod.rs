//! API Module
//!
//! HTTP handlers and routing for the book service REST API.
//!
//! # Endpoints
//! - `GET /books`, `POST /books`
//! - `GET /books/:id`, `PUT /books/:id`, `DELETE /books/:id`
//! - `GET /stats` - List cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
