//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique names in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a signup along with the camper and activity it references.
///
/// All entities are created with default values. Use the individual factories if you
/// need to customize specific entities.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((camper, activity, signup))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_signup_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::camper::Model,
        entity::activity::Model,
        entity::signup::Model,
    ),
    DbErr,
> {
    let camper = crate::factory::camper::create_camper(db).await?;
    let activity = crate::factory::activity::create_activity(db).await?;
    let signup = crate::factory::signup::create_signup(db, camper.id, activity.id).await?;

    Ok((camper, activity, signup))
}
