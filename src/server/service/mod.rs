//! Business logic layer between controllers and repositories.
//!
//! Services own the unit of work: every write opens a `DatabaseTransaction`, runs one or more
//! repositories on it and commits only once all steps succeeded. Returning early with an
//! error drops the transaction, which rolls it back.

pub mod activity;
pub mod camper;
pub mod signup;
