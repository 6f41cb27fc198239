//! Domain & parameter models for signup operations

use crate::{
    model::signup::{CreateSignupDto, SignupDto},
    server::{
        error::AppError,
        model::{activity::Activity, camper::Camper, validation::validate_signup_time},
    },
};

/// Message returned when a signup is missing one of its fields.
pub const SIGNUP_FIELDS_REQUIRED: &str = "time, camper_id and activity_id are required";

/// The signup domain model
///
/// Joins one camper to one activity at an hour of the day.
#[derive(Debug, Clone, PartialEq)]
pub struct Signup {
    pub id: i32,
    pub time: i32,
    pub camper_id: i32,
    pub activity_id: i32,
}

impl Signup {
    /// Converts an entity model to the signup domain model
    pub fn from_entity(entity: entity::signup::Model) -> Self {
        Self {
            id: entity.id,
            time: entity.time,
            camper_id: entity.camper_id,
            activity_id: entity.activity_id,
        }
    }
}

/// A signup with both the camper and the activity it references.
#[derive(Debug, Clone, PartialEq)]
pub struct SignupWithRelations {
    pub signup: Signup,
    pub camper: Camper,
    pub activity: Activity,
}

impl SignupWithRelations {
    pub fn into_dto(self) -> SignupDto {
        SignupDto {
            id: self.signup.id,
            time: self.signup.time,
            camper_id: self.signup.camper_id,
            activity_id: self.signup.activity_id,
            camper: self.camper.into_dto(),
            activity: self.activity.into_dto(),
        }
    }
}

/// Validated parameters for creating a new signup
///
/// The referenced camper and activity are not checked here; that happens inside the
/// transaction that inserts the signup.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateSignupParams {
    pub time: i32,
    pub camper_id: i32,
    pub activity_id: i32,
}

impl CreateSignupParams {
    /// Validates a creation request.
    ///
    /// # Returns
    /// - `Ok(CreateSignupParams)` - All fields present and time within 0 to 23
    /// - `Err(AppError::BadRequest)` - A field is missing
    /// - `Err(AppError::Validation)` - Time is out of range
    pub fn from_dto(dto: CreateSignupDto) -> Result<Self, AppError> {
        let (Some(time), Some(camper_id), Some(activity_id)) =
            (dto.time, dto.camper_id, dto.activity_id)
        else {
            return Err(AppError::BadRequest(vec![
                SIGNUP_FIELDS_REQUIRED.to_string()
            ]));
        };

        Ok(Self {
            time: validate_signup_time(time)?,
            camper_id,
            activity_id,
        })
    }
}
