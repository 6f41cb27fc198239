//! Activity data repository for database operations

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::{
    activity::{Activity, ActivitySignup, ActivityWithSignups, CreateActivityParams},
    camper::Camper,
    signup::Signup,
};

pub struct ActivityRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ActivityRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new activity
    pub async fn create(&self, params: CreateActivityParams) -> Result<Activity, DbErr> {
        let activity = entity::activity::ActiveModel {
            name: ActiveValue::Set(Some(params.name)),
            difficulty: ActiveValue::Set(Some(params.difficulty)),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Activity::from_entity(activity))
    }

    /// Counts all stored activities
    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Activity::find().count(self.db).await
    }

    /// Gets every activity ordered by ID
    pub async fn get_all(&self) -> Result<Vec<Activity>, DbErr> {
        let activities = entity::prelude::Activity::find()
            .order_by_asc(entity::activity::Column::Id)
            .all(self.db)
            .await?;

        Ok(activities.into_iter().map(Activity::from_entity).collect())
    }

    /// Finds an activity by ID
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Activity>, DbErr> {
        let activity = entity::prelude::Activity::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(activity.map(Activity::from_entity))
    }

    /// Finds an activity by ID along with its signups and the camper of each signup
    ///
    /// Signups are ordered by ID.
    pub async fn find_with_signups(&self, id: i32) -> Result<Option<ActivityWithSignups>, DbErr> {
        let Some(activity) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let rows = entity::prelude::Signup::find()
            .filter(entity::signup::Column::ActivityId.eq(id))
            .find_also_related(entity::prelude::Camper)
            .order_by_asc(entity::signup::Column::Id)
            .all(self.db)
            .await?;

        let signups = rows
            .into_iter()
            .map(|(signup, camper)| {
                let camper = camper.ok_or_else(|| {
                    DbErr::RecordNotFound(format!(
                        "Camper {} referenced by signup {} not found",
                        signup.camper_id, signup.id
                    ))
                })?;

                Ok(ActivitySignup {
                    signup: Signup::from_entity(signup),
                    camper: Camper::from_entity(camper),
                })
            })
            .collect::<Result<Vec<_>, DbErr>>()?;

        Ok(Some(ActivityWithSignups { activity, signups }))
    }

    /// Deletes the activity row only
    ///
    /// Callers remove dependent signups first, see `SignupRepository::delete_by_activity_id`.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows deleted, 0 if the activity did not exist
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Activity::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
