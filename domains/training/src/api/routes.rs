//! Route definitions for Training domain API
//!
//! Every route sits behind the bearer-token gate.

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use lifttrack_auth::{require_auth, AuthBackend};

use super::handlers::{categories, exercises, lifts, muscle_groups, workouts};
use super::middleware::TrainingState;

/// Create category routes
fn category_routes() -> Router<TrainingState> {
    Router::new()
        .route(
            "/category",
            get(categories::list_categories).post(categories::create_category),
        )
        .route(
            "/category/{id}",
            get(categories::get_category)
                .patch(categories::update_category)
                .delete(categories::delete_category),
        )
}

/// Create muscle group routes
fn muscle_group_routes() -> Router<TrainingState> {
    Router::new()
        .route(
            "/muscle_group",
            get(muscle_groups::list_muscle_groups).post(muscle_groups::create_muscle_group),
        )
        .route(
            "/muscle_group/{name}",
            get(muscle_groups::get_muscle_group)
                .patch(muscle_groups::rename_muscle_group)
                .delete(muscle_groups::delete_muscle_group),
        )
}

/// Create exercise catalog routes
fn exercise_routes() -> Router<TrainingState> {
    Router::new()
        .route(
            "/exercise",
            get(exercises::list_exercises).post(exercises::create_exercise),
        )
        .route(
            "/exercise/group/{muscle_group}",
            get(exercises::list_exercises_by_muscle_group),
        )
        .route(
            "/exercise/{name}",
            get(exercises::get_exercise)
                .patch(exercises::update_exercise)
                .delete(exercises::delete_exercise),
        )
}

/// Create workout routes
fn workout_routes() -> Router<TrainingState> {
    Router::new()
        .route("/workout", post(workouts::create_workout))
        .route("/workout/history", get(workouts::list_workouts))
        .route("/workout/complete", post(workouts::create_complete_workout))
        .route(
            "/workout/{id}",
            get(workouts::get_workout)
                .patch(workouts::finish_workout)
                .delete(workouts::delete_workout),
        )
        .route("/workout/{id}/lifts", post(workouts::create_workout_lifts))
}

/// Create lift and personal-record routes
fn lift_routes() -> Router<TrainingState> {
    Router::new()
        .route("/lift", post(lifts::create_lift))
        .route("/lift/history", get(lifts::list_lifts))
        .route("/lift/history/pr/{order_by}", get(lifts::list_prs))
        .route(
            "/lift/pr/group/{muscle_group}/{order_by}",
            get(lifts::list_prs_by_muscle_group),
        )
        .route(
            "/lift/pr/{exercise_name}/{order_by}",
            get(lifts::list_prs_by_exercise),
        )
        .route(
            "/lift/{id}",
            get(lifts::get_lift)
                .patch(lifts::update_lift)
                .delete(lifts::delete_lift),
        )
}

/// Build all Training domain routes
pub fn routes(auth: AuthBackend) -> Router<TrainingState> {
    Router::new()
        .merge(category_routes())
        .merge(muscle_group_routes())
        .merge(exercise_routes())
        .merge(workout_routes())
        .merge(lift_routes())
        .route_layer(middleware::from_fn_with_state(auth, require_auth))
}
