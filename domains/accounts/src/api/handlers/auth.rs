//! Login handler: the only place access tokens are issued

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use lifttrack_common::{verify_dummy_password, verify_password, Error, Result, ValidatedJson};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::accounts::AccountResponse;
use crate::api::middleware::AccountsState;
use crate::Account;

/// Login credentials
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,

    #[validate(length(min = 6, max = 72))]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub access_token_expires_at: DateTime<Utc>,
    pub user: AccountResponse,
}

/// Exchange credentials for an access token
///
/// **POST /user/login**
///
/// Unknown email and wrong password are indistinguishable to the caller.
pub async fn login(
    State(state): State<AccountsState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> Result<Json<LoginResponse>> {
    let email = Account::normalize_email(&request.email);

    let Some(account) = state.repos.accounts.find_by_email(&email).await? else {
        verify_dummy_password(&request.password).await?;
        tracing::info!("Login failed: unknown email");
        return Err(Error::InvalidCredentials);
    };

    if !verify_password(&request.password, &account.password_hash).await? {
        tracing::info!(account_id = %account.id, "Login failed: wrong password");
        return Err(Error::InvalidCredentials);
    }

    let (access_token, payload) = state
        .auth
        .maker()
        .create_token(account.id, state.access_token_duration)
        .map_err(|e| Error::Internal(format!("Failed to create access token: {}", e)))?;

    tracing::info!(
        account_id = %account.id,
        token_id = %payload.id,
        expires_at = %payload.expires_at,
        "Access token issued"
    );

    Ok(Json(LoginResponse {
        access_token,
        access_token_expires_at: payload.expires_at,
        user: account.into(),
    }))
}
