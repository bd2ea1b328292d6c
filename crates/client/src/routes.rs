//! Route table, authentication guard and the shared navigator.
use std::{fmt, sync::Arc};

use api_types::transaction::TransactionKind;
use tokio::sync::watch;

use crate::token::TokenStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Landing,
    Login,
    Signup,
    Dashboard,
    List(TransactionKind),
    New(TransactionKind),
    Detail(TransactionKind, i64),
    Edit(TransactionKind, i64),
}

impl Route {
    /// Resolves a path. Unknown paths fall back to the landing page.
    pub fn parse(path: &str) -> Self {
        let segments: Vec<&str> = path
            .split('/')
            .filter(|segment| !segment.is_empty())
            .collect();

        match segments.as_slice() {
            [] => Self::Landing,
            ["login"] => Self::Login,
            ["signup"] => Self::Signup,
            ["dashboard"] => Self::Dashboard,
            [prefix, rest @ ..] => match kind_for_segment(prefix) {
                Some(kind) => parse_resource(kind, rest),
                None => Self::Landing,
            },
        }
    }

    pub fn path(&self) -> String {
        match self {
            Self::Landing => "/".to_string(),
            Self::Login => "/login".to_string(),
            Self::Signup => "/signup".to_string(),
            Self::Dashboard => "/dashboard".to_string(),
            Self::List(kind) => format!("/{}", kind.route_segment()),
            Self::New(kind) => format!("/{}/new", kind.route_segment()),
            Self::Detail(kind, id) => format!("/{}/{id}", kind.route_segment()),
            Self::Edit(kind, id) => format!("/{}/edit/{id}", kind.route_segment()),
        }
    }

    /// Whether the route requires a stored session token.
    pub fn is_protected(&self) -> bool {
        !matches!(self, Self::Landing | Self::Login | Self::Signup)
    }

    /// The transaction collection a route belongs to, if any.
    pub fn kind(&self) -> Option<TransactionKind> {
        match self {
            Self::List(kind) | Self::New(kind) | Self::Detail(kind, _) | Self::Edit(kind, _) => {
                Some(*kind)
            }
            _ => None,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

fn kind_for_segment(segment: &str) -> Option<TransactionKind> {
    [TransactionKind::Expense, TransactionKind::Income]
        .into_iter()
        .find(|kind| kind.route_segment() == segment)
}

fn parse_resource(kind: TransactionKind, rest: &[&str]) -> Route {
    match rest {
        [] => Route::List(kind),
        ["new"] => Route::New(kind),
        ["edit", id] => id
            .parse()
            .map(|id| Route::Edit(kind, id))
            .unwrap_or(Route::Landing),
        [id] => id
            .parse()
            .map(|id| Route::Detail(kind, id))
            .unwrap_or(Route::Landing),
        _ => Route::Landing,
    }
}

/// Synchronous presence check: protected routes redirect to the login page
/// when no token is stored. Token validity is not checked.
pub fn guard(route: Route, tokens: &dyn TokenStore) -> Route {
    if route.is_protected() && !tokens.is_present() {
        tracing::debug!("no session token, redirecting {route} to /login");
        return Route::Login;
    }
    route
}

/// Current location, shared between the API client (which forces the login
/// page on 401) and the front-end (which renders whatever is current).
#[derive(Debug, Clone)]
pub struct Navigator {
    current: Arc<watch::Sender<Route>>,
}

impl Navigator {
    pub fn new(initial: Route) -> Self {
        Self {
            current: Arc::new(watch::Sender::new(initial)),
        }
    }

    pub fn current(&self) -> Route {
        *self.current.borrow()
    }

    /// Navigates to `route`, applying the authentication guard.
    pub fn navigate(&self, route: Route, tokens: &dyn TokenStore) -> Route {
        let target = guard(route, tokens);
        self.replace(target);
        target
    }

    /// Unconditionally moves to `route`.
    pub fn replace(&self, route: Route) {
        self.current.send_replace(route);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::MemoryTokenStore;

    #[test]
    fn parses_route_table() {
        use TransactionKind::*;

        assert_eq!(Route::parse("/"), Route::Landing);
        assert_eq!(Route::parse("/login"), Route::Login);
        assert_eq!(Route::parse("/signup"), Route::Signup);
        assert_eq!(Route::parse("/dashboard"), Route::Dashboard);
        assert_eq!(Route::parse("/expenses"), Route::List(Expense));
        assert_eq!(Route::parse("/expenses/new"), Route::New(Expense));
        assert_eq!(Route::parse("/expenses/12"), Route::Detail(Expense, 12));
        assert_eq!(Route::parse("/income/edit/3"), Route::Edit(Income, 3));
        assert_eq!(Route::parse("/income/"), Route::List(Income));
    }

    #[test]
    fn unknown_paths_fall_back_to_landing() {
        assert_eq!(Route::parse("/profile"), Route::Landing);
        assert_eq!(Route::parse("/expenses/abc"), Route::Landing);
        assert_eq!(Route::parse("/income/edit"), Route::Landing);
        assert_eq!(Route::parse("/income/1/2/3"), Route::Landing);
    }

    #[test]
    fn paths_round_trip() {
        let routes = [
            Route::Landing,
            Route::Login,
            Route::Dashboard,
            Route::List(TransactionKind::Income),
            Route::New(TransactionKind::Expense),
            Route::Detail(TransactionKind::Expense, 9),
            Route::Edit(TransactionKind::Income, 4),
        ];
        for route in routes {
            assert_eq!(Route::parse(&route.path()), route);
        }
    }

    #[test]
    fn guard_allows_protected_routes_with_token() {
        let tokens = MemoryTokenStore::with_token("t");
        assert_eq!(guard(Route::Dashboard, &tokens), Route::Dashboard);
        assert_eq!(
            guard(Route::List(TransactionKind::Expense), &tokens),
            Route::List(TransactionKind::Expense)
        );
    }

    #[test]
    fn guard_redirects_without_token() {
        let tokens = MemoryTokenStore::default();
        assert_eq!(guard(Route::Dashboard, &tokens), Route::Login);
        assert_eq!(guard(Route::Edit(TransactionKind::Income, 1), &tokens), Route::Login);
        assert_eq!(guard(Route::Signup, &tokens), Route::Signup);
        assert_eq!(guard(Route::Landing, &tokens), Route::Landing);
    }

    #[test]
    fn navigator_applies_guard_to_shared_route() {
        let tokens = MemoryTokenStore::default();
        let navigator = Navigator::new(Route::Landing);
        let shared = navigator.clone();

        assert_eq!(navigator.navigate(Route::Dashboard, &tokens), Route::Login);
        assert_eq!(navigator.current(), Route::Login);
        assert_eq!(shared.current(), Route::Login);
    }
}
