//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and transformed
//! into DTOs at the controller boundary. Each relational view of an entity has its own type
//! (a camper with its signups, a signup with its camper and activity, ...) so a projection can
//! never embed its own parent again.

pub mod activity;
pub mod camper;
pub mod signup;
pub mod validation;
