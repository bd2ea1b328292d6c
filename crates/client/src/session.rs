//! Auth session store.
//!
//! State transitions go through [`SessionState::reduce`]; [`Session`] wraps the
//! reducer with the API calls and token persistence.
use std::sync::Arc;

use api_types::user::{LoginCredentials, SignupData, User};

use crate::{
    api::AuthApi,
    error::Result,
    jwt,
    token::TokenStore,
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    pub user: Option<User>,
    pub token: Option<String>,
    pub is_authenticated: bool,
    pub is_loading: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionAction {
    LoginRequest,
    LoginSuccess { token: String, user: User },
    LoginFailure(String),
    SignupRequest,
    SignupSuccess,
    SignupFailure(String),
    Logout,
}

impl SessionState {
    /// State before any action: the stored token alone decides
    /// `is_authenticated`.
    pub fn from_store(tokens: &dyn TokenStore) -> Self {
        let token = tokens.get();
        Self {
            is_authenticated: token.is_some(),
            token,
            ..Self::default()
        }
    }

    pub fn reduce(self, action: SessionAction) -> Self {
        match action {
            SessionAction::LoginRequest | SessionAction::SignupRequest => Self {
                is_loading: true,
                error: None,
                ..self
            },
            SessionAction::LoginSuccess { token, user } => Self {
                is_loading: false,
                is_authenticated: true,
                user: Some(user),
                token: Some(token),
                error: None,
            },
            SessionAction::SignupSuccess => Self {
                is_loading: false,
                error: None,
                ..self
            },
            SessionAction::LoginFailure(message) | SessionAction::SignupFailure(message) => Self {
                is_loading: false,
                error: Some(message),
                ..self
            },
            SessionAction::Logout => Self {
                is_authenticated: false,
                user: None,
                token: None,
                ..self
            },
        }
    }
}

/// Session service with an explicit lifecycle: build it, [`restore`] once at
/// startup, then drive it with [`login`], [`signup`] and [`logout`].
///
///  [`restore`]: Session::restore
///  [`login`]: Session::login
///  [`signup`]: Session::signup
///  [`logout`]: Session::logout
pub struct Session {
    auth: AuthApi,
    tokens: Arc<dyn TokenStore>,
    state: SessionState,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl Session {
    pub fn new(auth: AuthApi, tokens: Arc<dyn TokenStore>) -> Self {
        let state = SessionState::from_store(tokens.as_ref());
        Self {
            auth,
            tokens,
            state,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn user(&self) -> Option<&User> {
        self.state.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.is_authenticated
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading
    }

    pub fn error(&self) -> Option<&str> {
        self.state.error.as_deref()
    }

    fn dispatch(&mut self, action: SessionAction) {
        let state = std::mem::take(&mut self.state);
        self.state = state.reduce(action);
    }

    /// Rebuilds the user identity from a stored token. An undecodable token is
    /// discarded.
    pub fn restore(&mut self) {
        let Some(token) = self.tokens.get() else {
            return;
        };

        match jwt::decode_user(&token) {
            Ok(user) => {
                tracing::debug!("restored session for {}", user.email);
                self.dispatch(SessionAction::LoginSuccess { token, user });
            }
            Err(err) => {
                tracing::warn!("discarding stored token: {err}");
                if let Err(err) = self.tokens.remove() {
                    tracing::error!("failed to remove session token: {err}");
                }
                self.dispatch(SessionAction::Logout);
            }
        }
    }

    pub async fn login(&mut self, credentials: &LoginCredentials) -> Result<()> {
        self.dispatch(SessionAction::LoginRequest);
        match self.try_login(credentials).await {
            Ok((token, user)) => {
                tracing::info!("logged in as {}", user.email);
                self.dispatch(SessionAction::LoginSuccess { token, user });
                Ok(())
            }
            Err(err) => {
                tracing::error!("login failed: {err}");
                self.dispatch(SessionAction::LoginFailure(err.to_string()));
                Err(err)
            }
        }
    }

    async fn try_login(&self, credentials: &LoginCredentials) -> Result<(String, User)> {
        let response = self.auth.login(credentials).await?;
        self.tokens.set(&response.access_token)?;
        let user = jwt::decode_user(&response.access_token).inspect_err(|_| {
            // A token we cannot read is not worth keeping.
            if let Err(err) = self.tokens.remove() {
                tracing::error!("failed to remove session token: {err}");
            }
        })?;
        Ok((response.access_token, user))
    }

    pub async fn signup(&mut self, data: &SignupData) -> Result<()> {
        self.dispatch(SessionAction::SignupRequest);
        match self.auth.signup(data).await {
            Ok(()) => {
                tracing::info!("created account for {}", data.email);
                self.dispatch(SessionAction::SignupSuccess);
                Ok(())
            }
            Err(err) => {
                tracing::error!("signup failed: {err}");
                self.dispatch(SessionAction::SignupFailure(err.to_string()));
                Err(err)
            }
        }
    }

    pub fn logout(&mut self) {
        if let Err(err) = self.tokens.remove() {
            tracing::error!("failed to remove session token: {err}");
        }
        self.dispatch(SessionAction::Logout);
    }

    /// Mirrors a session ended elsewhere (a 401 seen by the API client).
    pub fn expire(&mut self) {
        if self.state.is_authenticated {
            tracing::info!("session expired");
            self.dispatch(SessionAction::Logout);
        }
    }

    /// Clears a banner error without touching the rest of the state.
    pub fn clear_error(&mut self) {
        self.state.error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> User {
        User {
            id: 1,
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
        }
    }

    #[test]
    fn requests_set_loading_and_clear_error() {
        let state = SessionState {
            error: Some("old".to_string()),
            ..SessionState::default()
        };
        let state = state.reduce(SessionAction::LoginRequest);
        assert!(state.is_loading);
        assert_eq!(state.error, None);
    }

    #[test]
    fn login_success_authenticates() {
        let state = SessionState::default()
            .reduce(SessionAction::LoginRequest)
            .reduce(SessionAction::LoginSuccess {
                token: "t".to_string(),
                user: user(),
            });
        assert!(state.is_authenticated);
        assert!(!state.is_loading);
        assert_eq!(state.user, Some(user()));
        assert_eq!(state.token.as_deref(), Some("t"));
    }

    #[test]
    fn failure_keeps_identity_and_records_message() {
        let state = SessionState::default()
            .reduce(SessionAction::SignupRequest)
            .reduce(SessionAction::SignupFailure("Email already registered".to_string()));
        assert!(!state.is_loading);
        assert!(!state.is_authenticated);
        assert_eq!(state.error.as_deref(), Some("Email already registered"));
    }

    #[test]
    fn signup_success_does_not_authenticate() {
        let state = SessionState::default()
            .reduce(SessionAction::SignupRequest)
            .reduce(SessionAction::SignupSuccess);
        assert!(!state.is_authenticated);
        assert!(!state.is_loading);
    }

    #[test]
    fn logout_clears_identity() {
        let state = SessionState::default()
            .reduce(SessionAction::LoginSuccess {
                token: "t".to_string(),
                user: user(),
            })
            .reduce(SessionAction::Logout);
        assert!(!state.is_authenticated);
        assert_eq!(state.user, None);
        assert_eq!(state.token, None);
    }
}
