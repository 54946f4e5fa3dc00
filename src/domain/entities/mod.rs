//! Core business entities.

mod short_link;

pub use short_link::ShortLink;
