//! Accounts domain layer: entities

pub mod entities;
