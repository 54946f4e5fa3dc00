//! Shared utilities: code generation, database error classification, and
//! request header helpers.

pub mod code_generator;
pub mod db_error;
pub mod extract_host;
