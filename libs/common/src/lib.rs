//! Shared infrastructure for the olympiad tracker client
//!
//! This crate provides the pieces every part of the client depends on:
//! configuration loading, the request error type, and the persistent
//! bearer-token store.

pub mod config;
pub mod error;
pub mod token;

// Re-export for convenience
pub use config::ClientConfig;
pub use error::{ApiResult, RequestError};
pub use token::TokenStore;
