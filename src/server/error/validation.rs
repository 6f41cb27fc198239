use thiserror::Error;

/// A field failed the invariant of the entity it belongs to.
///
/// The display strings are part of the API contract and appear verbatim in error bodies.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Camper name was the empty string.
    #[error("Camper must have a name.")]
    EmptyCamperName,

    /// Camper age outside 8..=18.
    #[error("Age cannot be younger than 8 or older than 18.")]
    CamperAgeOutOfRange(i32),

    /// Signup hour outside 0..=23.
    #[error("Time must be between 0 and 23.")]
    SignupTimeOutOfRange(i32),
}
