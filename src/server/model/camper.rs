//! Domain & parameter models for camper operations

use crate::{
    model::camper::{
        CamperDto, CamperSignupDto, CamperWithSignupsDto, CreateCamperDto, UpdateCamperDto,
    },
    server::{
        error::AppError,
        model::{
            activity::Activity,
            signup::Signup,
            validation::{validate_camper_age, validate_camper_name},
        },
    },
};

/// Message returned when a camper is created without a name or an age.
pub const CAMPER_FIELDS_REQUIRED: &str = "Name and age are required";

/// Message returned when a camper update carries no fields.
pub const NO_INPUT_DATA: &str = "No input data provided";

/// The camper domain model
#[derive(Debug, Clone, PartialEq)]
pub struct Camper {
    pub id: i32,
    pub name: String,
    pub age: i32,
}

impl Camper {
    /// Converts an entity model to the camper domain model
    pub fn from_entity(entity: entity::camper::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            age: entity.age,
        }
    }

    pub fn into_dto(self) -> CamperDto {
        CamperDto {
            id: self.id,
            name: self.name,
            age: self.age,
        }
    }
}

/// A signup owned by a camper, paired with the activity it is for.
#[derive(Debug, Clone, PartialEq)]
pub struct CamperSignup {
    pub signup: Signup,
    pub activity: Activity,
}

impl CamperSignup {
    pub fn into_dto(self) -> CamperSignupDto {
        CamperSignupDto {
            id: self.signup.id,
            time: self.signup.time,
            camper_id: self.signup.camper_id,
            activity_id: self.signup.activity_id,
            activity: self.activity.into_dto(),
        }
    }
}

/// A camper together with all of its signups, ordered by signup ID.
#[derive(Debug, Clone, PartialEq)]
pub struct CamperWithSignups {
    pub camper: Camper,
    pub signups: Vec<CamperSignup>,
}

impl CamperWithSignups {
    pub fn into_dto(self) -> CamperWithSignupsDto {
        CamperWithSignupsDto {
            id: self.camper.id,
            name: self.camper.name,
            age: self.camper.age,
            signups: self
                .signups
                .into_iter()
                .map(CamperSignup::into_dto)
                .collect(),
        }
    }
}

/// Validated parameters for creating a new camper
#[derive(Debug, Clone, PartialEq)]
pub struct CreateCamperParams {
    pub name: String,
    pub age: i32,
}

impl CreateCamperParams {
    /// Validates a creation request.
    ///
    /// # Returns
    /// - `Ok(CreateCamperParams)` - Name is non-empty and age is within 8 to 18
    /// - `Err(AppError::BadRequest)` - Name or age is missing, or name is empty
    /// - `Err(AppError::Validation)` - Age is out of range
    pub fn from_dto(dto: CreateCamperDto) -> Result<Self, AppError> {
        let (Some(name), Some(age)) = (dto.name.filter(|n| !n.is_empty()), dto.age) else {
            return Err(AppError::BadRequest(vec![
                CAMPER_FIELDS_REQUIRED.to_string()
            ]));
        };

        Ok(Self {
            name: validate_camper_name(name)?,
            age: validate_camper_age(age)?,
        })
    }
}

/// Requested changes to an existing camper, not yet validated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateCamperParams {
    pub name: Option<String>,
    pub age: Option<i32>,
}

impl From<UpdateCamperDto> for UpdateCamperParams {
    fn from(dto: UpdateCamperDto) -> Self {
        Self {
            name: dto.name,
            age: dto.age,
        }
    }
}

impl UpdateCamperParams {
    /// Validates every provided field, collecting all failures.
    ///
    /// # Returns
    /// - `Ok(UpdateCamperParams)` - Every provided field is valid
    /// - `Err(AppError::BadRequest)` - No field was provided, or one message per invalid field
    pub fn validate(self) -> Result<Self, AppError> {
        if self.name.is_none() && self.age.is_none() {
            return Err(AppError::BadRequest(vec![NO_INPUT_DATA.to_string()]));
        }

        let mut errors = Vec::new();

        let name = match self.name.map(validate_camper_name).transpose() {
            Ok(name) => name,
            Err(e) => {
                errors.push(e.to_string());
                None
            }
        };

        let age = match self.age.map(validate_camper_age).transpose() {
            Ok(age) => age,
            Err(e) => {
                errors.push(e.to_string());
                None
            }
        };

        if !errors.is_empty() {
            return Err(AppError::BadRequest(errors));
        }

        Ok(Self { name, age })
    }
}
