//! Auth endpoint operations

use common::{ApiResult, TokenStore};
use serde::Deserialize;
use tracing::info;

use crate::dispatch::{AuthAction, Dispatcher};
use crate::models::{AuthPayload, RegisterData, User};

/// Envelope of the identity check response
#[derive(Deserialize)]
struct UserEnvelope {
    user: User,
}

/// Typed wrappers for the auth endpoint
#[derive(Clone)]
pub struct AuthApi {
    dispatch: Dispatcher,
    tokens: TokenStore,
}

impl AuthApi {
    /// Create the auth API over a shared dispatcher
    pub fn new(dispatch: Dispatcher) -> Self {
        let tokens = dispatch.tokens().clone();
        Self { dispatch, tokens }
    }

    /// Create an account. A returned token is persisted immediately.
    pub async fn register(&self, data: &RegisterData) -> ApiResult<AuthPayload> {
        info!("Registering account for {}", data.email);

        let payload: AuthPayload = self
            .dispatch
            .call(
                AuthAction::Register.into(),
                Some(serde_json::to_value(data)?),
                &[],
            )
            .await?;

        if !payload.token.is_empty() {
            self.tokens.save(&payload.token)?;
        }

        Ok(payload)
    }

    /// Exchange credentials for a token. The token is persisted immediately.
    pub async fn login(&self, email: &str, password: &str) -> ApiResult<AuthPayload> {
        info!("Login attempt for {}", email);

        let body = serde_json::json!({ "email": email, "password": password });
        let payload: AuthPayload = self
            .dispatch
            .call(AuthAction::Login.into(), Some(body), &[])
            .await?;

        if !payload.token.is_empty() {
            self.tokens.save(&payload.token)?;
        }

        Ok(payload)
    }

    /// Resolve the principal behind the persisted token.
    pub async fn me(&self) -> ApiResult<User> {
        let envelope: UserEnvelope = self.dispatch.call(AuthAction::Me.into(), None, &[]).await?;
        Ok(envelope.user)
    }
}
