//! Signup data repository for database operations

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

use crate::server::model::signup::{CreateSignupParams, Signup};

pub struct SignupRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SignupRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new signup
    ///
    /// # Returns
    /// - `Ok(Signup)` - The created signup with its generated ID
    /// - `Err(DbErr)` - Database error during insert, including foreign key violations when
    ///   the camper or activity does not exist
    pub async fn create(&self, params: CreateSignupParams) -> Result<Signup, DbErr> {
        let signup = entity::signup::ActiveModel {
            time: ActiveValue::Set(params.time),
            camper_id: ActiveValue::Set(params.camper_id),
            activity_id: ActiveValue::Set(params.activity_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Signup::from_entity(signup))
    }

    /// Deletes every signup for an activity
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of signups deleted
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete_by_activity_id(&self, activity_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Signup::delete_many()
            .filter(entity::signup::Column::ActivityId.eq(activity_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
