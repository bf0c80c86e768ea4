//! Muscle group API handlers

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
use crate::MuscleGroup;

/// Request for creating or renaming a muscle group
#[derive(Debug, Deserialize, Validate)]
pub struct MuscleGroupRequest {
    #[validate(custom(function = "catalog_name_rule", message = "Invalid muscle group name"))]
    pub group_name: String,
}

fn not_found(name: &str) -> Error {
    Error::NotFound(format!("Muscle group '{}' not found", name))
}

/// **POST /muscle_group**
pub async fn create_muscle_group(
    State(state): State<TrainingState>,
    ValidatedJson(request): ValidatedJson<MuscleGroupRequest>,
) -> Result<(StatusCode, Json<MuscleGroup>)> {
    let group = state.repos.muscle_groups.create(&request.group_name).await?;

    tracing::info!(group_id = group.id, group_name = %group.group_name, "Muscle group created");

    Ok((StatusCode::CREATED, Json(group)))
}

/// **GET /muscle_group**
pub async fn list_muscle_groups(
    State(state): State<TrainingState>,
) -> Result<Json<Vec<MuscleGroup>>> {
    Ok(Json(state.repos.muscle_groups.list().await?))
}

/// **GET /muscle_group/{name}**
pub async fn get_muscle_group(
    State(state): State<TrainingState>,
    Path(name): Path<String>,
) -> Result<Json<MuscleGroup>> {
    let group = state
        .repos
        .muscle_groups
        .get_by_name(&name)
        .await?
        .ok_or_else(|| not_found(&name))?;

    Ok(Json(group))
}

/// **PATCH /muscle_group/{name}**
///
/// Renames only the addressed group; its exercises move with it.
pub async fn rename_muscle_group(
    State(state): State<TrainingState>,
    Path(name): Path<String>,
    ValidatedJson(request): ValidatedJson<MuscleGroupRequest>,
) -> Result<Json<MuscleGroup>> {
    let group = state
        .repos
        .muscle_groups
        .rename(&name, &request.group_name)
        .await?
        .ok_or_else(|| not_found(&name))?;

    tracing::info!(from = %name, to = %group.group_name, "Muscle group renamed");

    Ok(Json(group))
}

/// **DELETE /muscle_group/{name}**
///
/// Rejected with 400 while exercises are still filed under the group.
pub async fn delete_muscle_group(
    State(state): State<TrainingState>,
    Path(name): Path<String>,
) -> Result<Json<MuscleGroup>> {
    let group = state
        .repos
        .muscle_groups
        .delete(&name)
        .await?
        .ok_or_else(|| not_found(&name))?;

    Ok(Json(group))
}
