//! SQLite-backed book store.

use std::str::FromStr;
use std::sync::Arc;

use anyhow::Context;
use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use tracing::info;

use crate::error::{ApiError, Result};
use crate::models::{Book, NewBook};
use crate::store::BookRepository;

const IN_MEMORY_URL: &str = "sqlite::memory:";

#[derive(Debug, Clone)]
pub struct SqliteBookStore {
    pool: Arc<SqlitePool>,
}

impl SqliteBookStore {
    /// Opens (creating if missing) the database at `database_url` and
    /// ensures the `books` table exists.
    pub async fn connect(database_url: &str, max_connections: u32) -> anyhow::Result<Self> {
        info!("Opening SQLite database at: {}", database_url);

        let options = SqliteConnectOptions::from_str(database_url)
            .with_context(|| format!("Invalid database URL: {}", database_url))?
            .create_if_missing(true);

        // An in-memory database lives and dies with its connection, so the
        // pool must hold exactly one that is never recycled.
        let pool_options = if database_url.contains(":memory:") {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(max_connections.max(1))
        };

        let pool = pool_options
            .connect_with(options)
            .await
            .with_context(|| format!("Failed to connect to SQLite database at: {}", database_url))?;

        Self::run_migrations(&pool)
            .await
            .context("Failed to run database migrations")?;

        info!("Database initialization complete");

        Ok(Self {
            pool: Arc::new(pool),
        })
    }

    /// Fresh private in-memory database.
    pub async fn in_memory() -> anyhow::Result<Self> {
        Self::connect(IN_MEMORY_URL, 1).await
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    async fn run_migrations(pool: &SqlitePool) -> std::result::Result<(), sqlx::Error> {
        // AUTOINCREMENT keeps identifiers of deleted rows from being reused
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS books (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT NOT NULL,
                author TEXT NOT NULL,
                published_date TEXT NOT NULL
            )
            "#,
        )
        .execute(pool)
        .await?;

        Ok(())
    }
}

#[async_trait]
impl BookRepository for SqliteBookStore {
    async fn list_all(&self) -> Result<Vec<Book>> {
        let books = sqlx::query_as::<_, Book>(
            "SELECT id, title, author, published_date FROM books ORDER BY id",
        )
        .fetch_all(self.pool())
        .await?;

        Ok(books)
    }

    async fn get(&self, id: i64) -> Result<Book> {
        sqlx::query_as::<_, Book>(
            "SELECT id, title, author, published_date FROM books WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool())
        .await?
        .ok_or(ApiError::NotFound)
    }

    async fn create(&self, book: NewBook) -> Result<Book> {
        let id = sqlx::query("INSERT INTO books (title, author, published_date) VALUES (?, ?, ?)")
            .bind(&book.title)
            .bind(&book.author)
            .bind(&book.published_date)
            .execute(self.pool())
            .await?
            .last_insert_rowid();

        info!("Book {} added", id);
        Ok(book.into_book(id))
    }

    async fn update(&self, id: i64, book: NewBook) -> Result<Book> {
        let updated = sqlx::query(
            "UPDATE books SET title = ?, author = ?, published_date = ? WHERE id = ?",
        )
        .bind(&book.title)
        .bind(&book.author)
        .bind(&book.published_date)
        .bind(id)
        .execute(self.pool())
        .await?
        .rows_affected();

        if updated == 0 {
            return Err(ApiError::NotFound);
        }

        info!("Book {} updated", id);
        Ok(book.into_book(id))
    }

    async fn delete(&self, id: i64) -> Result<()> {
        let deleted = sqlx::query("DELETE FROM books WHERE id = ?")
            .bind(id)
            .execute(self.pool())
            .await?
            .rows_affected();

        if deleted == 0 {
            return Err(ApiError::NotFound);
        }

        info!("Book {} deleted", id);
        Ok(())
    }
}
