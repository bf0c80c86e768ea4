//! Training domain layer: entities, validation rules, time conversion

pub mod entities;
pub mod time;
pub mod validation;
