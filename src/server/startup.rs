use sea_orm::{DatabaseConnection, TransactionTrait};
use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config,
    data::{activity::ActivityRepository, camper::CamperRepository},
    error::AppError,
    model::{activity::CreateActivityParams, camper::CreateCamperParams},
};

/// Activities inserted by `seed_database`, as name and difficulty.
const SEED_ACTIVITIES: [(&str, i32); 5] = [
    ("Archery", 2),
    ("Swimming", 3),
    ("Canoeing", 4),
    ("Hiking", 1),
    ("Arts and Crafts", 1),
];

/// Campers inserted by `seed_database`, as name and age.
const SEED_CAMPERS: [(&str, i32); 3] = [("Caitlin", 8), ("Lizzie", 9), ("Ben", 16)];

/// Installs the global tracing subscriber.
///
/// The filter is read from `RUST_LOG` and defaults to `info`.
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(env_filter).init();
}

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Inserts sample activities and campers when the store holds no activities yet.
///
/// Activities have no create endpoint, so this is how a fresh store gets something to sign
/// up for. Everything is inserted in one transaction.
///
/// # Returns
/// - `Ok(true)` - Sample data was inserted
/// - `Ok(false)` - Activities already exist; nothing was changed
/// - `Err(AppError)` - Database error, nothing was changed
pub async fn seed_database(db: &DatabaseConnection) -> Result<bool, AppError> {
    let txn = db.begin().await?;

    let activity_repo = ActivityRepository::new(&txn);
    if activity_repo.count().await? > 0 {
        tracing::info!("Activities already present, skipping seed");
        return Ok(false);
    }

    for (name, difficulty) in SEED_ACTIVITIES {
        activity_repo
            .create(CreateActivityParams {
                name: name.to_string(),
                difficulty,
            })
            .await?;
    }

    let camper_repo = CamperRepository::new(&txn);
    for (name, age) in SEED_CAMPERS {
        camper_repo
            .create(CreateCamperParams {
                name: name.to_string(),
                age,
            })
            .await?;
    }

    txn.commit().await?;

    tracing::info!(
        "Seeded {} activities and {} campers",
        SEED_ACTIVITIES.len(),
        SEED_CAMPERS.len()
    );

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{EntityTrait, PaginatorTrait};
    use test_utils::{builder::TestBuilder, factory};

    #[tokio::test]
    async fn seeds_empty_store() -> Result<(), AppError> {
        let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        assert!(seed_database(db).await?);

        let activities = ActivityRepository::new(db).get_all().await?;
        assert_eq!(activities.len(), SEED_ACTIVITIES.len());
        assert_eq!(activities[0].name.as_deref(), Some("Archery"));
        assert_eq!(activities[0].difficulty, Some(2));
        assert_eq!(
            entity::prelude::Camper::find().count(db).await?,
            SEED_CAMPERS.len() as u64
        );

        Ok(())
    }

    #[tokio::test]
    async fn skips_seed_when_activities_exist() -> Result<(), AppError> {
        let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        factory::create_activity(db).await?;

        assert!(!seed_database(db).await?);
        assert_eq!(entity::prelude::Activity::find().count(db).await?, 1);
        assert_eq!(entity::prelude::Camper::find().count(db).await?, 0);

        Ok(())
    }
}
