use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::activity::ActivityDto;

/// A camper without related signups.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CamperDto {
    pub id: i32,
    pub name: String,
    pub age: i32,
}

/// A camper with every signup it owns, each signup carrying its activity.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CamperWithSignupsDto {
    pub id: i32,
    pub name: String,
    pub age: i32,
    pub signups: Vec<CamperSignupDto>,
}

/// A signup as seen from its camper: the activity is embedded, the camper is not.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CamperSignupDto {
    pub id: i32,
    pub time: i32,
    pub camper_id: i32,
    pub activity_id: i32,
    pub activity: ActivityDto,
}

/// Body of `POST /campers`. Both fields are required; they are optional here so that a
/// missing field produces the API's own error body instead of a deserialization failure.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
pub struct CreateCamperDto {
    pub name: Option<String>,
    pub age: Option<i32>,
}

/// Body of `PATCH /campers/{id}`. Any subset of fields may be given.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
pub struct UpdateCamperDto {
    pub name: Option<String>,
    pub age: Option<i32>,
}
