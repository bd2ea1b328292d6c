use std::sync::Arc;

use reqwest::{RequestBuilder, Response, StatusCode, Url};
use serde::{Deserialize, de::DeserializeOwned};

use crate::{
    error::{ClientError, Result},
    routes::{Navigator, Route},
    token::TokenStore,
};

mod auth;
mod transactions;

pub use auth::AuthApi;
pub use transactions::TransactionApi;

use api_types::transaction::TransactionKind;

const FALLBACK_MESSAGE: &str = "Something went wrong";

/// Failure body. Clients historically read `message`; the backend writes `error`.
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    message: Option<String>,
    error: Option<String>,
}

/// HTTP client for the REST backend.
///
/// Cheap to clone; clones share the connection pool, the token store and the
/// navigator.
#[derive(Clone)]
pub struct ApiClient {
    base_url: Url,
    http: reqwest::Client,
    tokens: Arc<dyn TokenStore>,
    navigator: Navigator,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url.as_str())
            .field("route", &self.navigator.current())
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    pub fn new(base_url: &str, tokens: Arc<dyn TokenStore>, navigator: Navigator) -> Result<Self> {
        // Without the trailing slash `Url::join` would drop the last path segment.
        let normalized = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{base_url}/")
        };
        let base_url =
            Url::parse(&normalized).map_err(|err| ClientError::InvalidBaseUrl(err.to_string()))?;

        Ok(Self {
            base_url,
            http: reqwest::Client::new(),
            tokens,
            navigator,
        })
    }

    pub fn auth(&self) -> AuthApi {
        AuthApi::new(self.clone())
    }

    pub fn transactions(&self, kind: TransactionKind) -> TransactionApi {
        TransactionApi::new(self.clone(), kind)
    }

    pub fn expenses(&self) -> TransactionApi {
        self.transactions(TransactionKind::Expense)
    }

    pub fn incomes(&self) -> TransactionApi {
        self.transactions(TransactionKind::Income)
    }

    pub fn tokens(&self) -> &Arc<dyn TokenStore> {
        &self.tokens
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub(crate) fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|err| ClientError::InvalidBaseUrl(err.to_string()))
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// Attaches the bearer token when one is stored.
    pub(crate) fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match self.tokens.get() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    pub(crate) async fn send(&self, request: RequestBuilder) -> Result<Response> {
        request.send().await.map_err(|err| {
            tracing::error!("request failed: {err}");
            ClientError::Transport(err)
        })
    }

    /// Maps a response to its payload.
    ///
    /// - 204 resolves to `None`.
    /// - 401 removes the stored token, forces the login page and fails with
    ///   [`ClientError::SessionExpired`].
    /// - Other failures carry the server's message.
    pub(crate) async fn handle_response<T: DeserializeOwned>(
        &self,
        res: Response,
    ) -> Result<Option<T>> {
        let status = res.status();

        if status == StatusCode::NO_CONTENT {
            return Ok(None);
        }

        if status == StatusCode::UNAUTHORIZED {
            tracing::info!("{} answered 401, ending session", res.url().path());
            if let Err(err) = self.tokens.remove() {
                tracing::error!("failed to remove session token: {err}");
            }
            self.navigator.replace(Route::Login);
            return Err(ClientError::SessionExpired);
        }

        if !status.is_success() {
            let message = res
                .json::<ErrorResponse>()
                .await
                .ok()
                .and_then(|body| body.message.or(body.error))
                .filter(|message| !message.is_empty())
                .unwrap_or_else(|| FALLBACK_MESSAGE.to_string());
            tracing::warn!("request failed with {status}: {message}");
            return Err(ClientError::Api { status, message });
        }

        res.json::<T>().await.map(Some).map_err(ClientError::Transport)
    }

    /// Like [`handle_response`](Self::handle_response) for calls that must
    /// return a body.
    pub(crate) async fn expect_body<T: DeserializeOwned>(&self, res: Response) -> Result<T> {
        self.handle_response(res)
            .await?
            .ok_or(ClientError::EmptyResponse)
    }
}
