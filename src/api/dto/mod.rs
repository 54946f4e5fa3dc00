//! Request and response DTOs for the HTTP API.

pub mod health;
pub mod shorten;
