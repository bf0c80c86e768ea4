//! Category API handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use lifttrack_common::{Error, Result, ValidatedJson};
use serde::Deserialize;
use validator::Validate;

use crate::api::middleware::TrainingState;
use crate::domain::validation::catalog_name_rule;
use crate::Category;

/// Request for creating or renaming a category
#[derive(Debug, Deserialize, Validate)]
pub struct CategoryRequest {
    #[validate(custom(function = "catalog_name_rule", message = "Invalid category name"))]
    pub name: String,
}

fn not_found(id: i16) -> Error {
    Error::NotFound(format!("Category {} not found", id))
}

/// **POST /category**
pub async fn create_category(
    State(state): State<TrainingState>,
    ValidatedJson(request): ValidatedJson<CategoryRequest>,
) -> Result<(StatusCode, Json<Category>)> {
    let category = state.repos.categories.create(&request.name).await?;

    tracing::info!(category_id = category.id, name = %category.name, "Category created");

    Ok((StatusCode::CREATED, Json(category)))
}

/// **GET /category**
pub async fn list_categories(State(state): State<TrainingState>) -> Result<Json<Vec<Category>>> {
    Ok(Json(state.repos.categories.list().await?))
}

/// **GET /category/{id}**
pub async fn get_category(
    State(state): State<TrainingState>,
    Path(id): Path<i16>,
) -> Result<Json<Category>> {
    let category = state
        .repos
        .categories
        .get(id)
        .await?
        .ok_or_else(|| not_found(id))?;

    Ok(Json(category))
}

/// **PATCH /category/{id}**
pub async fn update_category(
    State(state): State<TrainingState>,
    Path(id): Path<i16>,
    ValidatedJson(request): ValidatedJson<CategoryRequest>,
) -> Result<Json<Category>> {
    let category = state
        .repos
        .categories
        .rename(id, &request.name)
        .await?
        .ok_or_else(|| not_found(id))?;

    Ok(Json(category))
}

/// **DELETE /category/{id}**
pub async fn delete_category(
    State(state): State<TrainingState>,
    Path(id): Path<i16>,
) -> Result<Json<Category>> {
    let category = state
        .repos
        .categories
        .delete(id)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(category_id = category.id, "Category deleted");

    Ok(Json(category))
}
