//! Repository implementations for the Training domain

pub mod categories;
pub mod exercises;
pub mod lifts;
pub mod muscle_groups;
pub mod transactions;
pub mod workouts;

use sqlx::{PgPool, Postgres, Transaction};

pub use categories::CategoryRepository;
pub use exercises::ExerciseRepository;
pub use lifts::LiftRepository;
pub use muscle_groups::MuscleGroupRepository;
pub use transactions::{
    create_lift_tx, create_lifts_tx, create_workout_tx, get_workout_for_user_tx,
    set_finish_time_tx,
};
pub use workouts::WorkoutRepository;

/// Combined repository access for the Training domain
#[derive(Clone)]
pub struct TrainingRepositories {
    pool: PgPool,
    pub categories: CategoryRepository,
    pub muscle_groups: MuscleGroupRepository,
    pub exercises: ExerciseRepository,
    pub workouts: WorkoutRepository,
    pub lifts: LiftRepository,
}

impl TrainingRepositories {
    pub fn new(pool: PgPool) -> Self {
        Self {
            categories: CategoryRepository::new(pool.clone()),
            muscle_groups: MuscleGroupRepository::new(pool.clone()),
            exercises: ExerciseRepository::new(pool.clone()),
            workouts: WorkoutRepository::new(pool.clone()),
            lifts: LiftRepository::new(pool.clone()),
            pool,
        }
    }

    /// Begin a new database transaction.
    pub async fn begin(&self) -> std::result::Result<Transaction<'static, Postgres>, sqlx::Error> {
        self.pool.begin().await
    }
}
