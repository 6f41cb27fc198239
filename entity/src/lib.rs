//! SeaORM entities for the camp signup store.
//!
//! Three tables are modelled: `campers`, `activities` and the `signups` join table, which
//! carries its own identity and a `time` slot. Campers and activities reach each other
//! through signups.

pub mod prelude;

pub mod activity;
pub mod camper;
pub mod signup;
