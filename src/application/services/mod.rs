//! Application services orchestrating the domain layer.

mod link_service;

pub use link_service::{LinkService, MAX_CODE_ATTEMPTS};
