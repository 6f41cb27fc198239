use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{activity::ActivityDto, camper::CamperDto};

/// A standalone signup with both its camper and its activity embedded.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct SignupDto {
    pub id: i32,
    pub time: i32,
    pub camper_id: i32,
    pub activity_id: i32,
    pub camper: CamperDto,
    pub activity: ActivityDto,
}

/// Body of `POST /signups`. All three fields are required.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
pub struct CreateSignupDto {
    pub time: Option<i32>,
    pub camper_id: Option<i32>,
    pub activity_id: Option<i32>,
}
