use crate::server::{
    data::{activity::ActivityRepository, signup::SignupRepository},
    model::activity::CreateActivityParams,
};
use sea_orm::{ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod count;
mod delete;
mod find_with_signups;
