//! Transport layer for the action-multiplexed backend
//!
//! Every server interaction passes through [`Dispatcher::call`], so
//! bearer-header attachment and error normalization exist exactly once.
//! The backend exposes two logical endpoints, each selecting its operation
//! through a mandatory `action` query parameter.

use common::{ApiResult, ClientConfig, RequestError, TokenStore};
use reqwest::{Method, Url, header};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

/// Logical backend endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Auth,
    Olympiads,
}

/// Actions of the auth endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthAction {
    Register,
    Login,
    Me,
}

impl AuthAction {
    /// Wire name of the action
    pub fn name(&self) -> &'static str {
        match self {
            AuthAction::Register => "register",
            AuthAction::Login => "login",
            AuthAction::Me => "me",
        }
    }

    /// HTTP method of the action; reads are GET, mutations POST
    pub fn method(&self) -> Method {
        match self {
            AuthAction::Me => Method::GET,
            _ => Method::POST,
        }
    }
}

/// Actions of the olympiads endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OlympiadAction {
    List,
    Create,
    Result,
    MyResults,
    Stats,
    Students,
    Approve,
}

impl OlympiadAction {
    /// Wire name of the action
    pub fn name(&self) -> &'static str {
        match self {
            OlympiadAction::List => "list",
            OlympiadAction::Create => "create",
            OlympiadAction::Result => "result",
            OlympiadAction::MyResults => "my-results",
            OlympiadAction::Stats => "stats",
            OlympiadAction::Students => "students",
            OlympiadAction::Approve => "approve",
        }
    }

    /// HTTP method of the action; reads are GET, mutations POST
    pub fn method(&self) -> Method {
        match self {
            OlympiadAction::Create | OlympiadAction::Result | OlympiadAction::Approve => {
                Method::POST
            }
            _ => Method::GET,
        }
    }
}

/// An action bound to its endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Auth(AuthAction),
    Olympiads(OlympiadAction),
}

impl Action {
    /// Endpoint the action belongs to
    pub fn endpoint(&self) -> Endpoint {
        match self {
            Action::Auth(_) => Endpoint::Auth,
            Action::Olympiads(_) => Endpoint::Olympiads,
        }
    }

    /// Wire name of the action
    pub fn name(&self) -> &'static str {
        match self {
            Action::Auth(action) => action.name(),
            Action::Olympiads(action) => action.name(),
        }
    }

    /// HTTP method of the action
    pub fn method(&self) -> Method {
        match self {
            Action::Auth(action) => action.method(),
            Action::Olympiads(action) => action.method(),
        }
    }
}

impl From<AuthAction> for Action {
    fn from(action: AuthAction) -> Self {
        Action::Auth(action)
    }
}

impl From<OlympiadAction> for Action {
    fn from(action: OlympiadAction) -> Self {
        Action::Olympiads(action)
    }
}

/// The single choke point for server traffic
#[derive(Clone)]
pub struct Dispatcher {
    http: reqwest::Client,
    config: ClientConfig,
    tokens: TokenStore,
}

impl Dispatcher {
    /// Create a new dispatcher over the given configuration and token store
    pub fn new(config: ClientConfig, tokens: TokenStore) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
            tokens,
        }
    }

    /// Token store consulted for the bearer credential
    pub fn tokens(&self) -> &TokenStore {
        &self.tokens
    }

    /// Base URL of a logical endpoint
    fn base_url(&self, endpoint: Endpoint) -> &str {
        match endpoint {
            Endpoint::Auth => &self.config.auth_url,
            Endpoint::Olympiads => &self.config.olympiads_url,
        }
    }

    /// Build the request URL: base address plus the mandatory `action`
    /// parameter plus any extra query parameters.
    fn build_url(&self, action: Action, params: &[(&str, String)]) -> ApiResult<Url> {
        let base = self.base_url(action.endpoint());
        let mut url = Url::parse(base)
            .map_err(|err| RequestError::new(format!("Invalid endpoint URL {}: {}", base, err)))?;

        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("action", action.name());
            for (key, value) in params {
                pairs.append_pair(key, value);
            }
        }

        Ok(url)
    }

    /// Issue an authenticated call and normalize its outcome.
    ///
    /// The bearer header is attached iff a token is currently persisted;
    /// login and register run anonymously. The response body is parsed as
    /// JSON regardless of status; a failing status yields a
    /// [`RequestError`] with the server-reported message. No retry, no
    /// backoff.
    pub async fn call<T: DeserializeOwned>(
        &self,
        action: Action,
        body: Option<Value>,
        params: &[(&str, String)],
    ) -> ApiResult<T> {
        let url = self.build_url(action, params)?;
        debug!("Dispatching {} {}", action.method(), url);

        let mut request = self
            .http
            .request(action.method(), url)
            .header(header::CONTENT_TYPE, "application/json");

        if let Some(token) = self.tokens.load() {
            request = request.bearer_auth(token);
        }

        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request.send().await?;
        let status = response.status();
        let parsed: Value = response.json().await?;

        if !status.is_success() {
            let err = RequestError::from_body(&parsed);
            warn!("Action {} failed with {}: {}", action.name(), status, err);
            return Err(err);
        }

        Ok(serde_json::from_value(parsed)?)
    }
}
