use crate::server::{data::signup::SignupRepository, model::signup::CreateSignupParams};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait, SqlErr};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod store_cascade;
