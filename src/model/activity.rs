use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::camper::CamperDto;

/// An activity without related signups.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ActivityDto {
    pub id: i32,
    pub name: Option<String>,
    pub difficulty: Option<i32>,
}

/// An activity with every signup it owns, each signup carrying its camper.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ActivityWithSignupsDto {
    pub id: i32,
    pub name: Option<String>,
    pub difficulty: Option<i32>,
    pub signups: Vec<ActivitySignupDto>,
}

/// A signup as seen from its activity: the camper is embedded, the activity is not.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ActivitySignupDto {
    pub id: i32,
    pub time: i32,
    pub camper_id: i32,
    pub activity_id: i32,
    pub camper: CamperDto,
}
