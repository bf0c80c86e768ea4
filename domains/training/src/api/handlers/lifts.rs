//! Lift API handlers and personal-record rankings

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use lifttrack_auth::AuthUser;
use lifttrack_common::{Error, Pagination, Result, ValidatedJson};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::api::middleware::TrainingState;
use crate::domain::validation::{catalog_name_rule, validate_weight, MAX_REPS, MIN_REPS};
use crate::{Lift, LiftOrder};

/// Request for recording a single lift into an owned workout
#[derive(Debug, Deserialize, Validate)]
pub struct CreateLiftRequest {
    #[validate(custom(function = "catalog_name_rule", message = "Invalid exercise name"))]
    pub exercise_name: String,

    #[validate(range(min = 0.0))]
    pub weight_lifted: f32,

    #[validate(range(min = MIN_REPS, max = MAX_REPS))]
    pub reps: i16,

    pub workout_id: Uuid,
}

/// Partial update; absent fields are left unchanged
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateLiftRequest {
    #[validate(range(min = 0.0))]
    pub weight_lifted: Option<f32>,

    #[validate(range(min = MIN_REPS, max = MAX_REPS))]
    pub reps: Option<i16>,
}

impl UpdateLiftRequest {
    /// Out-of-range floats deserialize to infinity, which `range` lets through
    fn check_weight(&self) -> Result<()> {
        self.weight_lifted.map_or(Ok(()), validate_weight)
    }
}

fn not_found(id: Uuid) -> Error {
    Error::NotFound(format!("Lift {} not found", id))
}

/// **POST /lift**
pub async fn create_lift(
    AuthUser(payload): AuthUser,
    State(state): State<TrainingState>,
    ValidatedJson(request): ValidatedJson<CreateLiftRequest>,
) -> Result<(StatusCode, Json<Lift>)> {
    let user_id = payload.subject_id;

    state
        .repos
        .workouts
        .get_for_user(request.workout_id, user_id)
        .await?
        .ok_or_else(|| Error::NotFound(format!("Workout {} not found", request.workout_id)))?;

    let lift = Lift::new(
        user_id,
        request.workout_id,
        request.exercise_name,
        request.weight_lifted,
        request.reps,
    )?;
    let created = state.repos.lifts.create(&lift).await?;

    tracing::info!(lift_id = %created.id, workout_id = %created.workout_id, "Lift recorded");

    Ok((StatusCode::CREATED, Json(created)))
}

/// **GET /lift/{id}**
pub async fn get_lift(
    AuthUser(payload): AuthUser,
    State(state): State<TrainingState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Lift>> {
    let lift = state
        .repos
        .lifts
        .get_for_user(id, payload.subject_id)
        .await?
        .ok_or_else(|| not_found(id))?;

    Ok(Json(lift))
}

/// **GET /lift/history?page_id=1&page_size=10**
pub async fn list_lifts(
    AuthUser(payload): AuthUser,
    State(state): State<TrainingState>,
    Query(page): Query<Pagination>,
) -> Result<Json<Vec<Lift>>> {
    let lifts = state
        .repos
        .lifts
        .list_for_user(payload.subject_id, page.limit(), page.offset())
        .await?;

    Ok(Json(lifts))
}

/// **PATCH /lift/{id}**
pub async fn update_lift(
    AuthUser(payload): AuthUser,
    State(state): State<TrainingState>,
    Path(id): Path<Uuid>,
    ValidatedJson(request): ValidatedJson<UpdateLiftRequest>,
) -> Result<Json<Lift>> {
    request.check_weight()?;

    let lift = state
        .repos
        .lifts
        .update(id, payload.subject_id, request.weight_lifted, request.reps)
        .await?
        .ok_or_else(|| not_found(id))?;

    Ok(Json(lift))
}

/// **DELETE /lift/{id}**
pub async fn delete_lift(
    AuthUser(payload): AuthUser,
    State(state): State<TrainingState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Lift>> {
    let lift = state
        .repos
        .lifts
        .delete(id, payload.subject_id)
        .await?
        .ok_or_else(|| not_found(id))?;

    Ok(Json(lift))
}

/// Personal records across all exercises
///
/// **GET /lift/history/pr/{order_by}**
pub async fn list_prs(
    AuthUser(payload): AuthUser,
    State(state): State<TrainingState>,
    Path(order_by): Path<String>,
    Query(page): Query<Pagination>,
) -> Result<Json<Vec<Lift>>> {
    let order: LiftOrder = order_by.parse()?;

    let lifts = state
        .repos
        .lifts
        .list_prs(payload.subject_id, order, page.limit(), page.offset())
        .await?;

    Ok(Json(lifts))
}

/// Personal records for one exercise
///
/// **GET /lift/pr/{exercise_name}/{order_by}**
pub async fn list_prs_by_exercise(
    AuthUser(payload): AuthUser,
    State(state): State<TrainingState>,
    Path((exercise_name, order_by)): Path<(String, String)>,
    Query(page): Query<Pagination>,
) -> Result<Json<Vec<Lift>>> {
    let order: LiftOrder = order_by.parse()?;

    let lifts = state
        .repos
        .lifts
        .list_prs_by_exercise(
            payload.subject_id,
            &exercise_name,
            order,
            page.limit(),
            page.offset(),
        )
        .await?;

    Ok(Json(lifts))
}

/// Personal records for every exercise in a muscle group
///
/// **GET /lift/pr/group/{muscle_group}/{order_by}**
pub async fn list_prs_by_muscle_group(
    AuthUser(payload): AuthUser,
    State(state): State<TrainingState>,
    Path((muscle_group, order_by)): Path<(String, String)>,
    Query(page): Query<Pagination>,
) -> Result<Json<Vec<Lift>>> {
    let order: LiftOrder = order_by.parse()?;

    let lifts = state
        .repos
        .lifts
        .list_prs_by_muscle_group(
            payload.subject_id,
            &muscle_group,
            order,
            page.limit(),
            page.offset(),
        )
        .await?;

    Ok(Json(lifts))
}
