//! Route definitions for Accounts domain API

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use lifttrack_auth::{require_auth, AuthBackend};

use super::handlers::{accounts, auth};
use super::middleware::AccountsState;

/// Sign-up and login; reachable without a token
fn public_routes() -> Router<AccountsState> {
    Router::new()
        .route("/accounts", post(accounts::create_account))
        .route("/user/login", post(auth::login))
}

/// Account routes behind the bearer-token gate
fn protected_routes(auth: AuthBackend) -> Router<AccountsState> {
    Router::new()
        .route("/accounts", get(accounts::list_accounts))
        .route(
            "/accounts/{id}",
            get(accounts::get_account).delete(accounts::delete_account),
        )
        .route_layer(middleware::from_fn_with_state(auth, require_auth))
}

/// Build all Accounts domain routes
pub fn routes(auth: AuthBackend) -> Router<AccountsState> {
    Router::new()
        .merge(public_routes())
        .merge(protected_routes(auth))
}
