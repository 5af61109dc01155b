//! Client core for the olympiad tracking platform
//!
//! Wraps the platform's two HTTP endpoints in typed operations, owns the
//! persisted bearer token, and tracks the authentication state of the
//! running client. Rendering is out of scope; this crate ends where a
//! screen begins.

pub mod api;
pub mod capabilities;
pub mod dispatch;
pub mod latest;
pub mod models;
pub mod session;
pub mod validation;

// Re-export for convenience
pub use api::{AuthApi, DashboardData, OlympiadsApi};
pub use capabilities::Capabilities;
pub use common::{ApiResult, ClientConfig, RequestError, TokenStore};
pub use dispatch::Dispatcher;
pub use latest::Latest;
pub use session::{SessionState, SessionStore};

/// Fully assembled client: session store plus endpoint wrappers over one
/// shared dispatcher and token store.
pub struct Client {
    pub session: SessionStore,
    pub olympiads: OlympiadsApi,
}

impl Client {
    /// Assemble the client from configuration. Cheap; no network traffic
    /// happens until the session is initialized or an operation is called.
    pub fn new(config: ClientConfig) -> Self {
        let tokens = TokenStore::new(&config.token_path);
        let dispatch = Dispatcher::new(config, tokens);
        let auth = AuthApi::new(dispatch.clone());
        let olympiads = OlympiadsApi::new(dispatch.clone());
        let session = SessionStore::new(auth, dispatch.tokens().clone());

        Self { session, olympiads }
    }
}
