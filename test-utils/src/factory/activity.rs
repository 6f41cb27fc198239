//! Activity factory for creating test activity entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test activities with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::activity::ActivityFactory;
///
/// let archery = ActivityFactory::new(&db).name("Archery").difficulty(2).build().await?;
/// ```
pub struct ActivityFactory<'a> {
    db: &'a DatabaseConnection,
    name: Option<String>,
    difficulty: Option<i32>,
}

impl<'a> ActivityFactory<'a> {
    /// Creates a new ActivityFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Activity {id}"` where id is auto-incremented
    /// - difficulty: `1`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: Some(format!("Activity {}", id)),
            difficulty: Some(1),
        }
    }

    /// Sets the activity name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the activity difficulty.
    pub fn difficulty(mut self, difficulty: i32) -> Self {
        self.difficulty = Some(difficulty);
        self
    }

    /// Leaves both name and difficulty unset, as activities managed outside the API may be.
    pub fn blank(mut self) -> Self {
        self.name = None;
        self.difficulty = None;
        self
    }

    /// Builds and inserts the activity entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::activity::Model)` - Created activity entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::activity::Model, DbErr> {
        entity::activity::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            difficulty: ActiveValue::Set(self.difficulty),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an activity with default values.
///
/// Shorthand for `ActivityFactory::new(db).build().await`.
pub async fn create_activity(db: &DatabaseConnection) -> Result<entity::activity::Model, DbErr> {
    ActivityFactory::new(db).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use entity::prelude::*;

    #[tokio::test]
    async fn creates_activity_with_custom_values() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(Activity).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let activity = ActivityFactory::new(db)
            .name("Archery")
            .difficulty(2)
            .build()
            .await?;

        assert_eq!(activity.name.as_deref(), Some("Archery"));
        assert_eq!(activity.difficulty, Some(2));

        Ok(())
    }

    #[tokio::test]
    async fn creates_blank_activity() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(Activity).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let activity = ActivityFactory::new(db).blank().build().await?;

        assert!(activity.name.is_none());
        assert!(activity.difficulty.is_none());

        Ok(())
    }
}
