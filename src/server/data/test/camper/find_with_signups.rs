use super::*;

/// Tests loading a camper with signups.
///
/// Verifies that each signup is returned with its activity, ordered by signup ID.
///
/// Expected: Ok(Some) with both signups and their activities
#[tokio::test]
async fn returns_signups_with_activities() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let camper = factory::create_camper(db).await?;
    let archery = factory::activity::ActivityFactory::new(db)
        .name("Archery")
        .difficulty(2)
        .build()
        .await?;
    let swimming = factory::activity::ActivityFactory::new(db)
        .name("Swimming")
        .difficulty(3)
        .build()
        .await?;
    let first = factory::signup::SignupFactory::new(db, camper.id, archery.id)
        .time(14)
        .build()
        .await?;
    let second = factory::signup::SignupFactory::new(db, camper.id, swimming.id)
        .time(9)
        .build()
        .await?;

    let result = CamperRepository::new(db)
        .find_with_signups(camper.id)
        .await?
        .unwrap();

    assert_eq!(result.camper.id, camper.id);
    assert_eq!(result.signups.len(), 2);
    assert_eq!(result.signups[0].signup.id, first.id);
    assert_eq!(result.signups[0].activity.name.as_deref(), Some("Archery"));
    assert_eq!(result.signups[1].signup.id, second.id);
    assert_eq!(result.signups[1].activity.id, swimming.id);

    Ok(())
}

/// Tests that signups of other campers are not included.
///
/// Expected: Ok(Some) with only the requested camper's signup
#[tokio::test]
async fn excludes_other_campers_signups() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (camper, activity, signup) =
        factory::helpers::create_signup_with_dependencies(db).await?;
    let other = factory::create_camper(db).await?;
    factory::create_signup(db, other.id, activity.id).await?;

    let result = CamperRepository::new(db)
        .find_with_signups(camper.id)
        .await?
        .unwrap();

    assert_eq!(result.signups.len(), 1);
    assert_eq!(result.signups[0].signup.id, signup.id);

    Ok(())
}

/// Tests loading a camper that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_camper() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = CamperRepository::new(db).find_with_signups(42).await?;

    assert!(result.is_none());

    Ok(())
}
