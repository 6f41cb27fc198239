use super::*;

/// Tests deleting an activity without signups.
///
/// Expected: Ok(1) with activity removed
#[tokio::test]
async fn deletes_activity() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let activity = factory::create_activity(db).await?;

    let deleted = ActivityRepository::new(db).delete(activity.id).await?;

    assert_eq!(deleted, 1);
    let stored = entity::prelude::Activity::find_by_id(activity.id)
        .one(db)
        .await?;
    assert!(stored.is_none());

    Ok(())
}

/// Tests deleting an activity that does not exist.
///
/// Expected: Ok(0)
#[tokio::test]
async fn reports_zero_rows_for_missing_activity() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let deleted = ActivityRepository::new(db).delete(12).await?;

    assert_eq!(deleted, 0);

    Ok(())
}

/// Tests removing signups before their activity.
///
/// Verifies the two-step cascade the activity service performs: dependent signups first,
/// then the activity, leaving other activities' signups alone.
///
/// Expected: Ok with only the other activity's signup remaining
#[tokio::test]
async fn deletes_signups_then_activity() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let camper = factory::create_camper(db).await?;
    let activity = factory::create_activity(db).await?;
    let other_activity = factory::create_activity(db).await?;
    factory::create_signup(db, camper.id, activity.id).await?;
    factory::create_signup(db, camper.id, activity.id).await?;
    let kept = factory::create_signup(db, camper.id, other_activity.id).await?;

    let removed = SignupRepository::new(db)
        .delete_by_activity_id(activity.id)
        .await?;
    ActivityRepository::new(db).delete(activity.id).await?;

    assert_eq!(removed, 2);
    let remaining = entity::prelude::Signup::find()
        .filter(entity::signup::Column::CamperId.eq(camper.id))
        .all(db)
        .await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, kept.id);

    let activities = entity::prelude::Activity::find().count(db).await?;
    assert_eq!(activities, 1);

    Ok(())
}
