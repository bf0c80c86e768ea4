//! Workout API handlers
//!
//! The owning account is always the token subject. Timestamps arrive as Unix
//! epoch milliseconds and leave as RFC 3339.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::Duration;
use lifttrack_auth::AuthUser;
use lifttrack_common::{Error, Pagination, RepositoryError, Result, ValidatedJson};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::api::middleware::TrainingState;
use crate::domain::validation::{catalog_name_rule, MAX_REPS, MIN_REPS};
use crate::{from_epoch_millis, Lift, Workout, WorkoutDetail};

/// Fixed length of a workout logged in one shot
const COMPLETE_WORKOUT_HOURS: i64 = 1;

/// Most lifts accepted in one batch
const MAX_BATCH_LIFTS: u64 = 100;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateWorkoutRequest {
    /// Epoch milliseconds
    #[validate(range(min = 0))]
    pub start_time: i64,
}

#[derive(Debug, Deserialize, Validate)]
pub struct FinishWorkoutRequest {
    /// Epoch milliseconds
    #[validate(range(min = 0))]
    pub finish_time: i64,
}

/// Workout with a single lift, recorded atomically
#[derive(Debug, Deserialize, Validate)]
pub struct CompleteWorkoutRequest {
    #[validate(range(min = 0))]
    pub start_time: i64,

    #[validate(custom(function = "catalog_name_rule", message = "Invalid exercise name"))]
    pub exercise_name: String,

    #[validate(range(min = 0.0))]
    pub weight_lifted: f32,

    #[validate(range(min = MIN_REPS, max = MAX_REPS))]
    pub reps: i16,
}

/// One entry of a batch insert
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct LiftEntry {
    #[validate(custom(function = "catalog_name_rule", message = "Invalid exercise name"))]
    pub exercise_name: String,

    #[validate(range(min = 0.0))]
    pub weight_lifted: f32,

    #[validate(range(min = MIN_REPS, max = MAX_REPS))]
    pub reps: i16,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateLiftsRequest {
    #[validate(length(min = 1, max = MAX_BATCH_LIFTS), nested)]
    pub lifts: Vec<LiftEntry>,
}

#[derive(Debug, Serialize)]
pub struct CompleteWorkoutResponse {
    pub workout: Workout,
    pub lift: Lift,
}

fn not_found(id: Uuid) -> Error {
    Error::NotFound(format!("Workout {} not found", id))
}

/// **POST /workout**
pub async fn create_workout(
    AuthUser(payload): AuthUser,
    State(state): State<TrainingState>,
    ValidatedJson(request): ValidatedJson<CreateWorkoutRequest>,
) -> Result<(StatusCode, Json<Workout>)> {
    let start_time = from_epoch_millis(request.start_time)?;
    let workout = Workout::new(payload.subject_id, start_time);

    let created = state.repos.workouts.create(&workout).await?;

    tracing::info!(workout_id = %created.id, user_id = %created.user_id, "Workout created");

    Ok((StatusCode::CREATED, Json(created)))
}

/// **GET /workout/history?page_id=1&page_size=10**
///
/// Newest first.
pub async fn list_workouts(
    AuthUser(payload): AuthUser,
    State(state): State<TrainingState>,
    Query(page): Query<Pagination>,
) -> Result<Json<Vec<Workout>>> {
    let workouts = state
        .repos
        .workouts
        .list_for_user(payload.subject_id, page.limit(), page.offset())
        .await?;

    Ok(Json(workouts))
}

/// **GET /workout/{id}**
pub async fn get_workout(
    AuthUser(payload): AuthUser,
    State(state): State<TrainingState>,
    Path(id): Path<Uuid>,
) -> Result<Json<WorkoutDetail>> {
    let workout = state
        .repos
        .workouts
        .get_for_user(id, payload.subject_id)
        .await?
        .ok_or_else(|| not_found(id))?;

    let lifts = state
        .repos
        .lifts
        .list_for_workout(id, payload.subject_id)
        .await?;

    Ok(Json(WorkoutDetail { workout, lifts }))
}

/// **PATCH /workout/{id}**
pub async fn finish_workout(
    AuthUser(payload): AuthUser,
    State(state): State<TrainingState>,
    Path(id): Path<Uuid>,
    ValidatedJson(request): ValidatedJson<FinishWorkoutRequest>,
) -> Result<Json<Workout>> {
    let finish_time = from_epoch_millis(request.finish_time)?;

    let workout = state
        .repos
        .workouts
        .get_for_user(id, payload.subject_id)
        .await?
        .ok_or_else(|| not_found(id))?;
    workout.validate_finish(finish_time)?;

    let finished = state
        .repos
        .workouts
        .finish(id, payload.subject_id, finish_time)
        .await?
        .ok_or_else(|| not_found(id))?;

    Ok(Json(finished))
}

/// **DELETE /workout/{id}**
///
/// The workout's lifts are deleted with it.
pub async fn delete_workout(
    AuthUser(payload): AuthUser,
    State(state): State<TrainingState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Workout>> {
    let deleted = state
        .repos
        .workouts
        .delete(id, payload.subject_id)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(workout_id = %deleted.id, "Workout deleted");

    Ok(Json(deleted))
}

/// Log a finished one-hour workout with a single lift
///
/// **POST /workout/complete**
///
/// Workout insert, lift insert and finish-time update share one transaction;
/// any failure leaves nothing behind.
pub async fn create_complete_workout(
    AuthUser(payload): AuthUser,
    State(state): State<TrainingState>,
    ValidatedJson(request): ValidatedJson<CompleteWorkoutRequest>,
) -> Result<(StatusCode, Json<CompleteWorkoutResponse>)> {
    let user_id = payload.subject_id;
    let start_time = from_epoch_millis(request.start_time)?;
    let finish_time = start_time
        .checked_add_signed(Duration::hours(COMPLETE_WORKOUT_HOURS))
        .ok_or_else(|| Error::Validation("Start time out of range".to_string()))?;

    let workout = Workout::new(user_id, start_time);
    let lift = Lift::new(
        user_id,
        workout.id,
        request.exercise_name,
        request.weight_lifted,
        request.reps,
    )?;

    let mut tx = state
        .repos
        .begin()
        .await
        .map_err(|e| Error::Internal(format!("Failed to begin transaction: {}", e)))?;

    crate::create_workout_tx(&mut tx, &workout).await?;
    let lift = crate::create_lift_tx(&mut tx, &lift).await?;
    let workout = crate::set_finish_time_tx(&mut tx, workout.id, finish_time).await?;

    tx.commit()
        .await
        .map_err(|e| Error::Internal(format!("Failed to commit transaction: {}", e)))?;

    tracing::info!(
        workout_id = %workout.id,
        lift_id = %lift.id,
        user_id = %user_id,
        "Complete workout recorded"
    );

    Ok((
        StatusCode::CREATED,
        Json(CompleteWorkoutResponse { workout, lift }),
    ))
}

/// Add several lifts to an owned workout at once
///
/// **POST /workout/{id}/lifts**
pub async fn create_workout_lifts(
    AuthUser(payload): AuthUser,
    State(state): State<TrainingState>,
    Path(id): Path<Uuid>,
    ValidatedJson(request): ValidatedJson<CreateLiftsRequest>,
) -> Result<(StatusCode, Json<Vec<Lift>>)> {
    let user_id = payload.subject_id;

    let lifts = request
        .lifts
        .into_iter()
        .map(|entry| {
            Lift::new(
                user_id,
                id,
                entry.exercise_name,
                entry.weight_lifted,
                entry.reps,
            )
        })
        .collect::<Result<Vec<_>>>()?;

    let mut tx = state
        .repos
        .begin()
        .await
        .map_err(|e| Error::Internal(format!("Failed to begin transaction: {}", e)))?;

    crate::get_workout_for_user_tx(&mut tx, id, user_id)
        .await
        .map_err(|e| match e {
            RepositoryError::NotFound => not_found(id),
            other => other.into(),
        })?;

    let created = crate::create_lifts_tx(&mut tx, &lifts).await?;

    tx.commit()
        .await
        .map_err(|e| Error::Internal(format!("Failed to commit transaction: {}", e)))?;

    tracing::info!(workout_id = %id, count = created.len(), "Lifts recorded");

    Ok((StatusCode::CREATED, Json(created)))
}
