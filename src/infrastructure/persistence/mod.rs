//! Persistence implementations of the domain repository traits.

mod sqlite_link_repository;

pub use sqlite_link_repository::SqliteLinkRepository;
