//! Lifttrack application composition root
//!
//! Composes all domain routers into a single application.

use anyhow::Context;
use axum::Router;
use lifttrack_accounts::{AccountsRepositories, AccountsState};
use lifttrack_auth::{AuthBackend, JwtMaker};
use lifttrack_common::Config;
use lifttrack_training::{TrainingRepositories, TrainingState};
use sqlx::PgPool;
use std::sync::Arc;

/// Create the main application router with all routes and middleware
///
/// Fails if the configured secret key is too short to sign tokens.
pub fn create_app(config: &Config, pool: PgPool) -> Result<Router, anyhow::Error> {
    let maker = JwtMaker::new(config.secret_key.as_bytes())
        .context("Invalid SECRET_KEY for access tokens")?;
    let auth = AuthBackend::new(Arc::new(maker));

    let access_token_duration = chrono::Duration::from_std(config.access_token_duration)
        .context("ACCESS_TOKEN_DURATION is out of range")?;

    let accounts_state = AccountsState {
        repos: AccountsRepositories::new(pool.clone()),
        auth: auth.clone(),
        access_token_duration,
    };

    let training_state = TrainingState {
        repos: TrainingRepositories::new(pool),
        auth: auth.clone(),
    };

    // Compose domain routers with shared infrastructure routes
    let app = Router::new()
        .route("/health", axum::routing::get(health_check))
        .merge(lifttrack_accounts::routes(auth.clone()).with_state(accounts_state))
        .merge(lifttrack_training::routes(auth).with_state(training_state));

    Ok(app)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
