//! Book Shelf - a small book catalogue HTTP service
//!
//! CRUD over a SQLite `books` table, with an optional read-through TTL cache
//! in front of the full book list.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod store;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use tasks::spawn_cleanup_task;
