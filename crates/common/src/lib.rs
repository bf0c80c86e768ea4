//! Shared utilities, configuration, and error handling for Lifttrack
//!
//! This crate provides common functionality used across the Lifttrack service:
//! - Configuration management following 12-factor principles
//! - Error types and their HTTP mapping
//! - Request extractors (validated JSON, pagination)
//! - Password hashing

pub mod config;
pub mod crypto;
pub mod db;
pub mod error;
pub mod extractors;

pub use config::Config;
pub use crypto::{hash_password, verify_dummy_password, verify_password};
pub use db::RepositoryError;
pub use error::{Error, Result};
pub use extractors::{Pagination, ValidatedJson};
