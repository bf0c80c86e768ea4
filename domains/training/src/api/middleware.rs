//! Training domain state and auth backend integration

use crate::TrainingRepositories;
use axum::extract::FromRef;
use lifttrack_auth::AuthBackend;

/// Application state for the Training domain
#[derive(Clone)]
pub struct TrainingState {
    pub repos: TrainingRepositories,
    pub auth: AuthBackend,
}

impl FromRef<TrainingState> for AuthBackend {
    fn from_ref(state: &TrainingState) -> Self {
        state.auth.clone()
    }
}
