use super::*;

/// Tests loading an activity with signups.
///
/// Verifies that each signup carries its camper.
///
/// Expected: Ok(Some) with the signup and its camper
#[tokio::test]
async fn returns_signups_with_campers() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (camper, activity, signup) =
        factory::helpers::create_signup_with_dependencies(db).await?;

    let result = ActivityRepository::new(db)
        .find_with_signups(activity.id)
        .await?
        .unwrap();

    assert_eq!(result.activity.id, activity.id);
    assert_eq!(result.signups.len(), 1);
    assert_eq!(result.signups[0].signup.id, signup.id);
    assert_eq!(result.signups[0].camper.name, camper.name);

    Ok(())
}

/// Tests loading an activity that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_activity() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ActivityRepository::new(db).find_with_signups(7).await?;

    assert!(result.is_none());

    Ok(())
}
