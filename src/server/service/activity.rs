use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{activity::ActivityRepository, signup::SignupRepository},
    error::AppError,
    model::activity::{Activity, ActivityWithSignups},
};

pub const ACTIVITY_NOT_FOUND: &str = "Activity not found";

pub struct ActivityService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ActivityService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every activity without signups
    pub async fn get_all(&self) -> Result<Vec<Activity>, AppError> {
        let activities = ActivityRepository::new(self.db).get_all().await?;

        Ok(activities)
    }

    /// Gets an activity with its signups, each signup carrying its camper
    pub async fn get_with_signups(
        &self,
        id: i32,
    ) -> Result<Option<ActivityWithSignups>, AppError> {
        let activity = ActivityRepository::new(self.db)
            .find_with_signups(id)
            .await?;

        Ok(activity)
    }

    /// Deletes an activity and every signup for it in one transaction
    ///
    /// # Returns
    /// - `Ok(true)` - The activity and its signups were deleted
    /// - `Ok(false)` - No activity has this ID; nothing was changed
    /// - `Err(AppError)` - Database error, nothing was changed
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let txn = self.db.begin().await?;

        if ActivityRepository::new(&txn).find_by_id(id).await?.is_none() {
            return Ok(false);
        }

        let signups = SignupRepository::new(&txn)
            .delete_by_activity_id(id)
            .await?;
        ActivityRepository::new(&txn).delete(id).await?;

        txn.commit().await?;

        tracing::info!("Deleted activity {} and {} signup(s)", id, signups);

        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{EntityTrait, PaginatorTrait};
    use test_utils::{builder::TestBuilder, factory};

    #[tokio::test]
    async fn deletes_activity_with_signups() -> Result<(), AppError> {
        let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let (camper, activity, _) = factory::helpers::create_signup_with_dependencies(db).await?;
        factory::create_signup(db, camper.id, activity.id).await?;

        let deleted = ActivityService::new(db).delete(activity.id).await?;

        assert!(deleted);
        assert_eq!(entity::prelude::Signup::find().count(db).await?, 0);
        assert_eq!(entity::prelude::Activity::find().count(db).await?, 0);

        Ok(())
    }

    #[tokio::test]
    async fn returns_false_for_unknown_activity() -> Result<(), AppError> {
        let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let deleted = ActivityService::new(db).delete(3).await?;

        assert!(!deleted);

        Ok(())
    }
}
