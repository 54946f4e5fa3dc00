//! # minilink
//!
//! A small URL shortening service built with Axum and SQLite.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - The `ShortLink` entity and the repository trait
//! - **Application Layer** ([`application`]) - Code allocation and lookup logic
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite persistence
//! - **API Layer** ([`api`]) - HTTP handlers, DTOs, and middleware
//!
//! ## Quick Start
//!
//! ```bash
//! # Everything is optional; the service runs against sqlite:links.db
//! export LISTEN="0.0.0.0:3000"
//! export PUBLIC_URL="https://s.example.com"
//!
//! cargo run
//! ```
//!
//! Shorten a URL:
//!
//! ```bash
//! curl -X POST http://localhost:3000/encurtar \
//!   -H 'Content-Type: application/json' \
//!   -d '{"link": "https://example.com/a/b"}'
//! # => {"link_curto":"http://localhost:3000/Qx9Tb1"}
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See the [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{LinkService, MAX_CODE_ATTEMPTS};
    pub use crate::domain::entities::ShortLink;
    pub use crate::error::AppError;
    pub use crate::state::AppState;
    pub use crate::utils::code_generator::{CodeGenerator, RandomCodeGenerator};
}
