//! Training domain: exercise catalog, workouts, lifts and personal records

pub mod api;
pub mod domain;
pub mod repository;

// Re-export domain types at the crate root for convenience
pub use domain::entities::*;
pub use domain::time::from_epoch_millis;
pub use domain::validation::validate_catalog_name;

// Re-export repository types
pub use repository::{
    create_lift_tx, create_lifts_tx, create_workout_tx, get_workout_for_user_tx,
    set_finish_time_tx, CategoryRepository, ExerciseRepository, LiftRepository,
    MuscleGroupRepository, TrainingRepositories, WorkoutRepository,
};

// Re-export API types
pub use api::routes;
pub use api::TrainingState;
