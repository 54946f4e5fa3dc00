//! Application layer: business logic on top of the domain contracts.

pub mod services;
