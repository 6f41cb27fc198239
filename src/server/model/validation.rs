//! Field validators for entity invariants.
//!
//! Each validator is a pure function returning the accepted value or the reason it was
//! rejected. Parameter types call them before anything is written to the store.

use std::ops::RangeInclusive;

use crate::server::error::validation::ValidationError;

/// Ages a camper may have.
pub const CAMPER_AGE_RANGE: RangeInclusive<i32> = 8..=18;

/// Hours of the day a signup may be scheduled for.
pub const SIGNUP_TIME_RANGE: RangeInclusive<i32> = 0..=23;

/// Rejects an empty camper name.
pub fn validate_camper_name(name: String) -> Result<String, ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::EmptyCamperName);
    }

    Ok(name)
}

/// Rejects camper ages outside 8 to 18 inclusive.
pub fn validate_camper_age(age: i32) -> Result<i32, ValidationError> {
    if !CAMPER_AGE_RANGE.contains(&age) {
        return Err(ValidationError::CamperAgeOutOfRange(age));
    }

    Ok(age)
}

/// Rejects signup hours outside 0 to 23 inclusive.
pub fn validate_signup_time(time: i32) -> Result<i32, ValidationError> {
    if !SIGNUP_TIME_RANGE.contains(&time) {
        return Err(ValidationError::SignupTimeOutOfRange(time));
    }

    Ok(time)
}
