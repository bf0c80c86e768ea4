//! Validation rules shared by catalog names and lift measurements

use lifttrack_common::{Error, Result};
use regex::Regex;

/// Minimum catalog name length (muscle groups, categories, exercises)
pub const MIN_NAME_LENGTH: usize = 3;

/// Maximum catalog name length
pub const MAX_NAME_LENGTH: usize = 64;

/// Fewest repetitions a lift can record
pub const MIN_REPS: i16 = 1;

/// Most repetitions a lift can record
pub const MAX_REPS: i16 = 1000;

lazy_static::lazy_static! {
    /// Catalog name characters: letters, digits, spaces, `-`, `_`, `'`
    pub static ref CATALOG_NAME_REGEX: Regex =
        Regex::new(r"^[\p{L}\p{N} _'-]+$").unwrap();
}

/// Validate a muscle group, category or exercise name
pub fn validate_catalog_name(name: &str) -> Result<()> {
    let length = name.chars().count();
    if !(MIN_NAME_LENGTH..=MAX_NAME_LENGTH).contains(&length) {
        return Err(Error::Validation(format!(
            "Name must be {}-{} characters",
            MIN_NAME_LENGTH, MAX_NAME_LENGTH
        )));
    }

    if name.trim() != name {
        return Err(Error::Validation(
            "Name must not start or end with whitespace".to_string(),
        ));
    }

    if !CATALOG_NAME_REGEX.is_match(name) {
        return Err(Error::Validation(
            "Name may only contain letters, digits, spaces, '-', '_' and '''".to_string(),
        ));
    }

    Ok(())
}

/// Validate a lifted weight
pub fn validate_weight(weight: f32) -> Result<()> {
    if !weight.is_finite() || weight < 0.0 {
        return Err(Error::Validation(
            "Weight lifted must be a non-negative number".to_string(),
        ));
    }
    Ok(())
}

/// Validate a repetition count
pub fn validate_reps(reps: i16) -> Result<()> {
    if !(MIN_REPS..=MAX_REPS).contains(&reps) {
        return Err(Error::Validation(format!(
            "Reps must be between {} and {}",
            MIN_REPS, MAX_REPS
        )));
    }
    Ok(())
}

/// Adapter for `#[validate(custom(...))]` on request structs
pub fn catalog_name_rule(name: &str) -> std::result::Result<(), validator::ValidationError> {
    validate_catalog_name(name).map_err(|_| validator::ValidationError::new("invalid_name"))
}
