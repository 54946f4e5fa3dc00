//! Repository trait for short link storage.

use crate::domain::entities::ShortLink;
use crate::error::AppError;
use async_trait::async_trait;

/// Durable mapping from short code to target URL.
///
/// Uniqueness of codes is enforced here, at the storage layer, not by the
/// caller's pre-check: concurrent inserts of the same code must leave
/// exactly one winner and report [`AppError::DuplicateCode`] to the losers.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteLinkRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Inserts a new short link. Never overwrites.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::DuplicateCode`] if the code is already stored,
    /// [`AppError::Storage`] on database failure.
    async fn insert(&self, code: &str, target: &str) -> Result<(), AppError>;

    /// Looks up a short link by its exact code.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(ShortLink))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database failure.
    async fn find_by_code(&self, code: &str) -> Result<Option<ShortLink>, AppError>;

    /// Returns whether a short link with this exact code is stored.
    ///
    /// Used by the allocator to skip insert attempts that are doomed to
    /// collide; the answer may be stale by insert time, which is why
    /// [`Self::insert`] stays the enforcement point.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database failure.
    async fn exists(&self, code: &str) -> Result<bool, AppError>;
}
