//! HTTP handlers for the Training domain

pub mod categories;
pub mod exercises;
pub mod lifts;
pub mod muscle_groups;
pub mod workouts;
