mod common;

use std::sync::Arc;

use api_types::user::{LoginCredentials, SignupData};
use client::{ClientError, MemoryTokenStore, Route, Session, TokenStore, guard};
use common::{EMAIL, MockBackend, PASSWORD, valid_token};

fn session_for(backend: &MockBackend, tokens: Arc<MemoryTokenStore>) -> Session {
    let (api, tokens, _) = backend.client_with(tokens);
    Session::new(api.auth(), tokens)
}

#[tokio::test]
async fn login_stores_token_and_decodes_user() {
    let backend = MockBackend::start().await;
    let tokens = Arc::new(MemoryTokenStore::default());
    let mut session = session_for(&backend, tokens.clone());
    assert!(!session.is_authenticated());

    session
        .login(&LoginCredentials {
            email: EMAIL.to_string(),
            password: PASSWORD.to_string(),
        })
        .await
        .unwrap();

    assert!(session.is_authenticated());
    assert!(!session.is_loading());
    assert_eq!(tokens.get(), Some(valid_token()));
    let user = session.user().unwrap();
    assert_eq!(user.id, 1);
    assert_eq!(user.name, "Ana");
    assert_eq!(user.email, EMAIL);

    let request = backend.requests().pop().unwrap();
    assert_eq!(request.path, "/users/login");
    assert_eq!(request.authorization, None);
}

#[tokio::test]
async fn login_failure_keeps_session_anonymous() {
    let backend = MockBackend::start().await;
    let tokens = Arc::new(MemoryTokenStore::default());
    let mut session = session_for(&backend, tokens.clone());

    let err = session
        .login(&LoginCredentials {
            email: EMAIL.to_string(),
            password: "wrong-pw".to_string(),
        })
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::Api { .. }));
    assert!(!session.is_authenticated());
    assert!(!session.is_loading());
    assert_eq!(session.error(), Some("Credenciais inválidas"));
    assert_eq!(tokens.get(), None);
}

#[tokio::test]
async fn signup_does_not_authenticate() {
    let backend = MockBackend::start().await;
    let tokens = Arc::new(MemoryTokenStore::default());
    let mut session = session_for(&backend, tokens.clone());

    session
        .signup(&SignupData {
            name: "Bruno".to_string(),
            email: "bruno@example.com".to_string(),
            password: "hunter22".to_string(),
        })
        .await
        .unwrap();

    assert!(!session.is_authenticated());
    assert_eq!(session.error(), None);
    assert_eq!(tokens.get(), None);

    session
        .login(&LoginCredentials {
            email: "bruno@example.com".to_string(),
            password: "hunter22".to_string(),
        })
        .await
        .unwrap();
    assert!(session.is_authenticated());
}

#[tokio::test]
async fn duplicate_signup_records_and_returns_error() {
    let backend = MockBackend::start().await;
    let mut session = session_for(&backend, Arc::new(MemoryTokenStore::default()));

    let err = session
        .signup(&SignupData {
            name: "Ana".to_string(),
            email: EMAIL.to_string(),
            password: PASSWORD.to_string(),
        })
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Email já cadastrado");
    assert_eq!(session.error(), Some("Email já cadastrado"));
    assert!(!session.is_loading());

    session.clear_error();
    assert_eq!(session.error(), None);
}

#[tokio::test]
async fn restore_rebuilds_identity_from_stored_token() {
    let backend = MockBackend::start().await;
    let tokens = Arc::new(MemoryTokenStore::with_token(valid_token()));
    let mut session = session_for(&backend, tokens);

    assert!(session.is_authenticated());
    assert_eq!(session.user(), None);

    session.restore();
    assert_eq!(session.user().map(|u| u.email.as_str()), Some(EMAIL));
    assert!(backend.requests().is_empty());
}

#[tokio::test]
async fn login_with_unreadable_token_is_rejected_and_not_kept() {
    let backend = MockBackend::start().await;
    backend.state.lock().unwrap().login_token = Some("not-a-jwt".to_string());
    let tokens = Arc::new(MemoryTokenStore::default());
    let mut session = session_for(&backend, tokens.clone());

    let err = session
        .login(&LoginCredentials {
            email: EMAIL.to_string(),
            password: PASSWORD.to_string(),
        })
        .await
        .unwrap_err();

    assert!(!matches!(err, ClientError::SessionExpired));
    assert!(!session.is_authenticated());
    assert!(session.error().is_some());
    assert_eq!(tokens.get(), None);
}

#[tokio::test]
async fn restore_discards_unreadable_token() {
    let backend = MockBackend::start().await;
    let tokens = Arc::new(MemoryTokenStore::with_token("garbage"));
    let mut session = session_for(&backend, tokens.clone());

    session.restore();
    assert!(!session.is_authenticated());
    assert_eq!(tokens.get(), None);
    assert_eq!(guard(Route::Dashboard, tokens.as_ref()), Route::Login);
}

#[tokio::test]
async fn logout_removes_token_and_guard_redirects() {
    let backend = MockBackend::start().await;
    let tokens = Arc::new(MemoryTokenStore::with_token(valid_token()));
    let mut session = session_for(&backend, tokens.clone());
    session.restore();

    assert_eq!(guard(Route::Dashboard, tokens.as_ref()), Route::Dashboard);
    session.logout();

    assert!(!session.is_authenticated());
    assert_eq!(session.user(), None);
    assert_eq!(tokens.get(), None);
    assert_eq!(guard(Route::Dashboard, tokens.as_ref()), Route::Login);
}

#[tokio::test]
async fn expire_mirrors_a_rejected_request() {
    let backend = MockBackend::start().await;
    let tokens = Arc::new(MemoryTokenStore::with_token("stale.but.present"));
    let (api, tokens, navigator) = backend.client_with(tokens);
    let mut session = Session::new(api.auth(), tokens.clone());
    assert!(session.is_authenticated());

    let err = api.incomes().get_by_id(1).await.unwrap_err();
    assert!(err.is_session_expired());
    session.expire();

    assert!(!session.is_authenticated());
    assert_eq!(tokens.get(), None);
    assert_eq!(navigator.current(), Route::Login);
}
