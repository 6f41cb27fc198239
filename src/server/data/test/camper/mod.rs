use crate::server::{
    data::camper::CamperRepository,
    model::camper::{CreateCamperParams, UpdateCamperParams},
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_with_signups;
mod get_all;
mod update;
