//! Link creation and resolution service.

use std::sync::Arc;

use crate::domain::entities::ShortLink;
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::CodeGenerator;

/// Maximum number of candidate codes drawn before allocation is declared
/// failed. A defensive bound: at 62^6 keyspace, hitting it means a
/// saturated keyspace or a persistent storage fault.
pub const MAX_CODE_ATTEMPTS: usize = 10;

/// Service for creating and resolving shortened links.
///
/// Owns code allocation: candidate codes come from the injected generator,
/// uniqueness is confirmed against the repository with bounded retries.
pub struct LinkService<R: LinkRepository, G: CodeGenerator> {
    repository: Arc<R>,
    generator: Arc<G>,
}

impl<R: LinkRepository, G: CodeGenerator> LinkService<R, G> {
    /// Creates a new link service.
    pub fn new(repository: Arc<R>, generator: Arc<G>) -> Self {
        Self {
            repository,
            generator,
        }
    }

    /// Creates a short link for the given target URL.
    ///
    /// The target is stored verbatim: no normalization, no scheme
    /// validation, only a non-empty check.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for an empty target,
    /// [`AppError::CodeSpaceExhausted`] when the attempt budget runs out,
    /// [`AppError::Storage`] on database failure.
    pub async fn shorten(&self, target: &str) -> Result<ShortLink, AppError> {
        if target.is_empty() {
            return Err(AppError::Validation("link must not be empty".to_string()));
        }

        let code = self.allocate_code(target).await?;

        Ok(ShortLink::new(code, target.to_string()))
    }

    /// Resolves a short code to its stored target URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches the code,
    /// [`AppError::Storage`] on database failure.
    pub async fn resolve(&self, code: &str) -> Result<String, AppError> {
        let link = self
            .repository
            .find_by_code(code)
            .await?
            .ok_or(AppError::NotFound)?;

        Ok(link.target)
    }

    /// Constructs the full short URL from a scheme-qualified base and a code.
    pub fn short_url(&self, base_url: &str, code: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), code)
    }

    /// Draws candidate codes until one is confirmed unique and inserted.
    ///
    /// The `exists` pre-check only avoids doomed insert attempts; the
    /// primary-key constraint behind `insert` is what actually closes the
    /// check-then-insert race. Losing that race costs an attempt and a
    /// redraw, same as a pre-check hit.
    async fn allocate_code(&self, target: &str) -> Result<String, AppError> {
        for attempt in 1..=MAX_CODE_ATTEMPTS {
            let code = self.generator.generate();

            if self.repository.exists(&code).await? {
                tracing::debug!(attempt, "code collision on pre-check, redrawing");
                continue;
            }

            match self.repository.insert(&code, target).await {
                Ok(()) => return Ok(code),
                Err(AppError::DuplicateCode) => {
                    tracing::warn!(attempt, "lost insert race on code, redrawing");
                    continue;
                }
                Err(e) => return Err(e),
            }
        }

        Err(AppError::CodeSpaceExhausted)
    }
}
