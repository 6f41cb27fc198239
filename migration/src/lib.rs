pub use sea_orm_migration::prelude::*;

mod m20260101_000001_create_camper_table;
mod m20260101_000002_create_activity_table;
mod m20260101_000003_create_signup_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260101_000001_create_camper_table::Migration),
            Box::new(m20260101_000002_create_activity_table::Migration),
            Box::new(m20260101_000003_create_signup_table::Migration),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm_migration::sea_orm::Database;

    const TABLES: [&str; 3] = ["campers", "activities", "signups"];

    #[tokio::test]
    async fn creates_all_tables() -> Result<(), DbErr> {
        let db = Database::connect("sqlite::memory:").await?;

        Migrator::up(&db, None).await?;

        let manager = SchemaManager::new(&db);
        for table in TABLES {
            assert!(manager.has_table(table).await?, "missing table {}", table);
        }

        Ok(())
    }

    #[tokio::test]
    async fn drops_all_tables_on_rollback() -> Result<(), DbErr> {
        let db = Database::connect("sqlite::memory:").await?;

        Migrator::up(&db, None).await?;
        Migrator::down(&db, None).await?;

        let manager = SchemaManager::new(&db);
        for table in TABLES {
            assert!(!manager.has_table(table).await?, "table {} still exists", table);
        }

        Ok(())
    }
}
