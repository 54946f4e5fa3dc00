//! SQLite implementation of the link repository.

use async_trait::async_trait;
use sqlx::{Row, SqlitePool};
use std::sync::Arc;

use crate::domain::entities::ShortLink;
use crate::domain::repositories::LinkRepository;
use crate::error::{AppError, map_sqlx_error};

/// SQLite repository for short link storage and retrieval.
///
/// Uses bound parameters throughout. The `code` primary key makes `insert`
/// atomic under concurrent writers: the constraint, not the caller's
/// pre-check, is what guarantees uniqueness.
pub struct SqliteLinkRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LinkRepository for SqliteLinkRepository {
    async fn insert(&self, code: &str, target: &str) -> Result<(), AppError> {
        sqlx::query("INSERT INTO links (code, target) VALUES (?1, ?2)")
            .bind(code)
            .bind(target)
            .execute(self.pool.as_ref())
            .await
            .map_err(map_sqlx_error)?;

        Ok(())
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<ShortLink>, AppError> {
        let row = sqlx::query("SELECT code, target FROM links WHERE code = ?1")
            .bind(code)
            .fetch_optional(self.pool.as_ref())
            .await
            .map_err(map_sqlx_error)?;

        Ok(row.map(|r| ShortLink::new(r.get("code"), r.get("target"))))
    }

    async fn exists(&self, code: &str) -> Result<bool, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM links WHERE code = ?1")
            .bind(code)
            .fetch_one(self.pool.as_ref())
            .await
            .map_err(map_sqlx_error)?;

        Ok(count > 0)
    }
}
