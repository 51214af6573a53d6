//! API Handlers
//!
//! HTTP request handlers for each book service endpoint.

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};

use crate::cache::BookListCache;
use crate::config::Config;
use crate::error::{ApiError, Result};
use crate::models::{
    BookMutationResponse, BookRequest, BookResponse, BooksResponse, HealthResponse,
    MessageResponse, StatsResponse,
};
use crate::store::{BookRepository, CachedBookRepository, SharedBookRepository, SqliteBookStore};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Book repository, cached or not
    pub books: SharedBookRepository,
    /// Handle to the list cache when caching is enabled
    pub cache: Option<BookListCache>,
}

impl AppState {
    /// State serving straight from `store`.
    pub fn uncached<R: BookRepository + 'static>(store: R) -> Self {
        Self {
            books: Arc::new(store),
            cache: None,
        }
    }

    /// State serving the book list through `cache`.
    pub fn cached<R: BookRepository + 'static>(store: R, cache: BookListCache) -> Self {
        Self {
            books: Arc::new(CachedBookRepository::new(store, cache.clone())),
            cache: Some(cache),
        }
    }

    /// Connects the store and applies the cache toggle from the Config.
    pub async fn from_config(config: &Config) -> anyhow::Result<Self> {
        let store = SqliteBookStore::connect(&config.database_url, config.db_max_connections)
            .await?;

        if config.cache_enabled {
            Ok(Self::cached(store, BookListCache::from_config(config)))
        } else {
            Ok(Self::uncached(store))
        }
    }
}

/// A path segment that is not an integer cannot name a book.
fn book_id(path: std::result::Result<Path<i64>, PathRejection>) -> Result<i64> {
    path.map(|Path(id)| id).map_err(|_| ApiError::NotFound)
}

/// Handler for GET /books
pub async fn list_books(State(state): State<AppState>) -> Result<Json<BooksResponse>> {
    let books = state.books.list_all().await?;
    Ok(Json(BooksResponse { books }))
}

/// Handler for POST /books
///
/// The payload is validated before anything reaches the store.
pub async fn create_book(
    State(state): State<AppState>,
    payload: std::result::Result<Json<BookRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<BookMutationResponse>)> {
    let Json(req) = payload?;
    let book = state.books.create(req.validate()?).await?;

    Ok((StatusCode::CREATED, Json(BookMutationResponse::added(book))))
}

/// Handler for GET /books/:id
pub async fn get_book(
    State(state): State<AppState>,
    id: std::result::Result<Path<i64>, PathRejection>,
) -> Result<Json<BookResponse>> {
    let book = state.books.get(book_id(id)?).await?;
    Ok(Json(BookResponse { book }))
}

/// Handler for PUT /books/:id
///
/// Replaces all three mutable fields; a malformed body is rejected before the
/// id is looked up.
pub async fn update_book(
    State(state): State<AppState>,
    id: std::result::Result<Path<i64>, PathRejection>,
    payload: std::result::Result<Json<BookRequest>, JsonRejection>,
) -> Result<Json<BookMutationResponse>> {
    let Json(req) = payload?;
    let book = req.validate()?;
    let updated = state.books.update(book_id(id)?, book).await?;

    Ok(Json(BookMutationResponse::updated(updated)))
}

/// Handler for DELETE /books/:id
pub async fn delete_book(
    State(state): State<AppState>,
    id: std::result::Result<Path<i64>, PathRejection>,
) -> Result<Json<MessageResponse>> {
    state.books.delete(book_id(id)?).await?;
    Ok(Json(MessageResponse::deleted()))
}

/// Handler for GET /stats
///
/// Reports list cache counters, or `enabled: false` without a cache.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    match &state.cache {
        Some(cache) => Json(StatsResponse::from_stats(&cache.stats().await)),
        None => Json(StatsResponse::disabled()),
    }
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
