//! Account management API handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use lifttrack_auth::AuthUser;
use lifttrack_common::{hash_password, Error, Pagination, Result, ValidatedJson};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::api::middleware::AccountsState;
use crate::Account;

/// Request for creating an account (sign-up)
#[derive(Debug, Deserialize, Validate)]
pub struct CreateAccountRequest {
    #[validate(length(min = 3, max = 100))]
    pub name: String,

    #[validate(email)]
    pub email: String,

    #[validate(length(min = 6, max = 72))]
    pub password: String,

    #[validate(range(min = 0.0))]
    pub weight: f32,

    #[validate(range(min = 0.0, max = 100.0))]
    pub body_fat: f32,
}

/// Public view of an account; never carries the password hash
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccountResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub weight: f32,
    pub body_fat: f32,
    pub start_date: DateTime<Utc>,
    pub password_changed_at: DateTime<Utc>,
}

impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        Self {
            id: account.id,
            name: account.name,
            email: account.email,
            weight: account.weight,
            body_fat: account.body_fat,
            start_date: account.start_date,
            password_changed_at: account.password_changed_at,
        }
    }
}

/// Only the account holder may read or delete their account
fn ensure_self(auth: &AuthUser, id: Uuid) -> Result<()> {
    if auth.0.subject_id != id {
        return Err(Error::Authorization(
            "Cannot access another user's account".to_string(),
        ));
    }
    Ok(())
}

/// Sign up
///
/// **POST /accounts**
pub async fn create_account(
    State(state): State<AccountsState>,
    ValidatedJson(request): ValidatedJson<CreateAccountRequest>,
) -> Result<(StatusCode, Json<AccountResponse>)> {
    let password_hash = hash_password(&request.password).await?;
    let account = Account::new(
        request.name,
        request.email,
        password_hash,
        request.weight,
        request.body_fat,
    )?;

    let created = state.repos.accounts.create(&account).await.map_err(|e| {
        if matches!(e, Error::Conflict(_)) {
            Error::Conflict("An account with this email already exists".to_string())
        } else {
            e
        }
    })?;

    tracing::info!(account_id = %created.id, "Account created");

    Ok((StatusCode::CREATED, Json(created.into())))
}

/// Get the caller's own account
///
/// **GET /accounts/{id}**
pub async fn get_account(
    auth: AuthUser,
    State(state): State<AccountsState>,
    Path(id): Path<Uuid>,
) -> Result<Json<AccountResponse>> {
    ensure_self(&auth, id)?;

    let account = state
        .repos
        .accounts
        .get_by_id(id)
        .await?
        .ok_or_else(|| Error::NotFound("Account not found".to_string()))?;

    Ok(Json(account.into()))
}

/// List accounts
///
/// **GET /accounts?page_id=1&page_size=10**
pub async fn list_accounts(
    _auth: AuthUser,
    State(state): State<AccountsState>,
    Query(page): Query<Pagination>,
) -> Result<Json<Vec<AccountResponse>>> {
    let accounts = state
        .repos
        .accounts
        .list(page.limit(), page.offset())
        .await?;

    Ok(Json(accounts.into_iter().map(Into::into).collect()))
}

/// Delete the caller's own account
///
/// **DELETE /accounts/{id}**
///
/// Workouts and lifts owned by the account are deleted with it. Tokens
/// already issued for the account stay verifiable until they expire.
pub async fn delete_account(
    auth: AuthUser,
    State(state): State<AccountsState>,
    Path(id): Path<Uuid>,
) -> Result<Json<AccountResponse>> {
    ensure_self(&auth, id)?;

    let deleted = state
        .repos
        .accounts
        .delete(id)
        .await?
        .ok_or_else(|| Error::NotFound("Account not found".to_string()))?;

    tracing::info!(account_id = %deleted.id, "Account deleted");

    Ok(Json(deleted.into()))
}
