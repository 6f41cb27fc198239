//! Request and response DTOs forming the public JSON contract of the API.

pub mod activity;
pub mod api;
pub mod camper;
pub mod signup;
