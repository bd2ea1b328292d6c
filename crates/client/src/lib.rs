//! Saldo client core.
//!
//! Everything a front-end needs to drive the finance backend without knowing
//! about HTTP: the REST client, the session store, the route table and guard,
//! form validation and the page controllers.
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use client::{ApiClient, FileTokenStore, Navigator, Route, Session};
//!
//! let tokens = Arc::new(FileTokenStore::new("config/session.json"));
//! let navigator = Navigator::new(Route::Landing);
//! let api = ApiClient::new("http://127.0.0.1:5000", tokens.clone(), navigator)?;
//! let mut session = Session::new(api.auth(), tokens);
//! session.restore();
//! ```
pub mod api;
pub mod error;
pub mod forms;
pub mod jwt;
pub mod pages;
pub mod pagination;
pub mod routes;
pub mod session;
pub mod token;

pub use api::{ApiClient, AuthApi, TransactionApi};
pub use error::{ClientError, Result};
pub use routes::{Navigator, Route, guard};
pub use session::{Session, SessionAction, SessionState};
pub use token::{FileTokenStore, MemoryTokenStore, TOKEN_KEY, TokenStore};
