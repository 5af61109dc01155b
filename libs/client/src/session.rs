//! Session store: the single source of truth for who is logged in
//!
//! The store is an explicit, owned context object threaded to whatever
//! needs role-gated behavior, not ambient global state. It persists the
//! bearer token across restarts and purges it when the server rejects it.

use common::{ApiResult, TokenStore};
use tracing::{info, warn};

use crate::api::AuthApi;
use crate::capabilities::Capabilities;
use crate::models::{RegisterData, User};

/// Authentication state of the client
///
/// Born [`Loading`](SessionState::Loading); `initialize` resolves it to one
/// of the two terminal states. Login and register suspend their caller,
/// never the store itself, so no "authenticating" sub-state exists.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    Loading,
    Authenticated(User),
    Unauthenticated,
}

/// Owned session context
pub struct SessionStore {
    auth: AuthApi,
    tokens: TokenStore,
    state: SessionState,
}

impl SessionStore {
    /// Create a session store over the auth API and token store.
    pub fn new(auth: AuthApi, tokens: TokenStore) -> Self {
        Self {
            auth,
            tokens,
            state: SessionState::Loading,
        }
    }

    /// Resolve the persisted token, if any, into an authenticated session.
    ///
    /// A token the server rejects is removed from storage; this is the only
    /// point where stale tokens are purged. Failures degrade to logged-out
    /// instead of propagating, so an expired token cannot crash app start.
    pub async fn initialize(&mut self) {
        if self.tokens.load().is_none() {
            self.state = SessionState::Unauthenticated;
            return;
        }

        match self.auth.me().await {
            Ok(user) => {
                info!("Session restored for user {}", user.id);
                self.state = SessionState::Authenticated(user);
            }
            Err(err) => {
                warn!("Identity check failed, clearing stored token: {}", err);
                if let Err(err) = self.tokens.clear() {
                    warn!("Failed to clear rejected token: {}", err);
                }
                self.state = SessionState::Unauthenticated;
            }
        }
    }

    /// Log in with credentials. On failure the previous token and user are
    /// left untouched.
    pub async fn login(&mut self, email: &str, password: &str) -> ApiResult<User> {
        let payload = self.auth.login(email, password).await?;
        info!("Login succeeded for user {}", payload.user.id);
        self.state = SessionState::Authenticated(payload.user.clone());
        Ok(payload.user)
    }

    /// Create an account and enter the authenticated state. Same contract
    /// as login; inputs are pre-validated at the presentation layer.
    pub async fn register(&mut self, data: &RegisterData) -> ApiResult<User> {
        let payload = self.auth.register(data).await?;
        info!("Registration succeeded for user {}", payload.user.id);
        self.state = SessionState::Authenticated(payload.user.clone());
        Ok(payload.user)
    }

    /// Log out locally: clear the persisted token and the in-memory user.
    /// No server call is issued. Idempotent.
    pub fn logout(&mut self) {
        if let Err(err) = self.tokens.clear() {
            warn!("Failed to clear token on logout: {}", err);
        }
        self.state = SessionState::Unauthenticated;
    }

    /// Current session state
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// The authenticated user, if any
    pub fn user(&self) -> Option<&User> {
        match &self.state {
            SessionState::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    /// Whether a user is currently authenticated
    pub fn is_authenticated(&self) -> bool {
        matches!(self.state, SessionState::Authenticated(_))
    }

    /// Capability set of the current user, if any
    pub fn capabilities(&self) -> Option<Capabilities> {
        self.user().map(|user| Capabilities::for_role(user.role))
    }
}
