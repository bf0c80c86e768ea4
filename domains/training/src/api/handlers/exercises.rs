//! Exercise catalog API handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use lifttrack_common::{Error, Pagination, Result, ValidatedJson};
use serde::Deserialize;
use validator::Validate;

use crate::api::middleware::TrainingState;
use crate::domain::validation::catalog_name_rule;
use crate::Exercise;

/// Request for creating an exercise
#[derive(Debug, Deserialize, Validate)]
pub struct CreateExerciseRequest {
    #[validate(custom(function = "catalog_name_rule", message = "Invalid exercise name"))]
    pub name: String,

    #[validate(custom(function = "catalog_name_rule", message = "Invalid muscle group name"))]
    pub muscle_group: String,

    /// Optional category id
    pub category: Option<i16>,
}

/// Request for renaming and/or regrouping an exercise
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateExerciseRequest {
    #[validate(custom(function = "catalog_name_rule", message = "Invalid exercise name"))]
    pub name: Option<String>,

    #[validate(custom(function = "catalog_name_rule", message = "Invalid muscle group name"))]
    pub muscle_group: Option<String>,
}

fn not_found(name: &str) -> Error {
    Error::NotFound(format!("Exercise '{}' not found", name))
}

/// **POST /exercise**
///
/// Unknown muscle group or category is rejected with 400.
pub async fn create_exercise(
    State(state): State<TrainingState>,
    ValidatedJson(request): ValidatedJson<CreateExerciseRequest>,
) -> Result<(StatusCode, Json<Exercise>)> {
    let exercise = state
        .repos
        .exercises
        .create(&request.name, &request.muscle_group, request.category)
        .await?;

    tracing::info!(
        exercise_id = exercise.id,
        name = %exercise.name,
        muscle_group = %exercise.muscle_group,
        "Exercise created"
    );

    Ok((StatusCode::CREATED, Json(exercise)))
}

/// **GET /exercise?page_id=1&page_size=10**
pub async fn list_exercises(
    State(state): State<TrainingState>,
    Query(page): Query<Pagination>,
) -> Result<Json<Vec<Exercise>>> {
    let exercises = state
        .repos
        .exercises
        .list(page.limit(), page.offset())
        .await?;

    Ok(Json(exercises))
}

/// **GET /exercise/{name}**
pub async fn get_exercise(
    State(state): State<TrainingState>,
    Path(name): Path<String>,
) -> Result<Json<Exercise>> {
    let exercise = state
        .repos
        .exercises
        .get_by_name(&name)
        .await?
        .ok_or_else(|| not_found(&name))?;

    Ok(Json(exercise))
}

/// **GET /exercise/group/{muscle_group}**
pub async fn list_exercises_by_muscle_group(
    State(state): State<TrainingState>,
    Path(muscle_group): Path<String>,
) -> Result<Json<Vec<Exercise>>> {
    let exercises = state
        .repos
        .exercises
        .list_by_muscle_group(&muscle_group)
        .await?;

    Ok(Json(exercises))
}

/// **PATCH /exercise/{name}**
pub async fn update_exercise(
    State(state): State<TrainingState>,
    Path(name): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateExerciseRequest>,
) -> Result<Json<Exercise>> {
    let exercise = state
        .repos
        .exercises
        .update(
            &name,
            request.name.as_deref(),
            request.muscle_group.as_deref(),
        )
        .await?
        .ok_or_else(|| not_found(&name))?;

    Ok(Json(exercise))
}

/// **DELETE /exercise/{name}**
///
/// Rejected with 400 while lifts still reference the exercise.
pub async fn delete_exercise(
    State(state): State<TrainingState>,
    Path(name): Path<String>,
) -> Result<Json<Exercise>> {
    let exercise = state
        .repos
        .exercises
        .delete(&name)
        .await?
        .ok_or_else(|| not_found(&name))?;

    tracing::info!(exercise_id = exercise.id, "Exercise deleted");

    Ok(Json(exercise))
}
