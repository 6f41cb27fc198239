use super::*;

/// Tests creating a signup for an existing camper and activity.
///
/// Expected: Ok with signup persisted
#[tokio::test]
async fn creates_signup() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let camper = factory::create_camper(db).await?;
    let activity = factory::create_activity(db).await?;

    let signup = SignupRepository::new(db)
        .create(CreateSignupParams {
            time: 23,
            camper_id: camper.id,
            activity_id: activity.id,
        })
        .await?;

    assert_eq!(signup.time, 23);
    assert_eq!(signup.camper_id, camper.id);
    assert_eq!(signup.activity_id, activity.id);

    let stored = entity::prelude::Signup::find_by_id(signup.id)
        .one(db)
        .await?;
    assert!(stored.is_some());

    Ok(())
}

/// Tests creating a signup referencing an activity that does not exist.
///
/// Verifies that the store rejects the foreign key and nothing is persisted.
///
/// Expected: Err with a foreign key constraint violation
#[tokio::test]
async fn rejects_missing_activity() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let camper = factory::create_camper(db).await?;

    let result = SignupRepository::new(db)
        .create(CreateSignupParams {
            time: 10,
            camper_id: camper.id,
            activity_id: 404,
        })
        .await;

    let err = result.unwrap_err();
    assert!(matches!(
        err.sql_err(),
        Some(SqlErr::ForeignKeyConstraintViolation(_))
    ));

    let count = entity::prelude::Signup::find().count(db).await?;
    assert_eq!(count, 0);

    Ok(())
}
