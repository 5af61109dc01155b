//! Typed operation wrappers over the dispatcher
//!
//! Each wrapper fixes the endpoint and action name and shapes the body or
//! query parameters; none carries logic beyond that, so every contract
//! lives in one place.

use serde::{Deserialize, Serialize};

pub mod auth;
pub mod olympiads;

pub use auth::AuthApi;
pub use olympiads::{DashboardData, OlympiadsApi};

/// Acknowledgement of a creating mutation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Created {
    pub id: i64,
    pub message: String,
}

/// Acknowledgement carrying only a message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub message: String,
}
