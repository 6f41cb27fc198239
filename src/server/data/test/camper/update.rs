use super::*;

/// Tests updating only the age of a camper.
///
/// Verifies that fields left as `None` keep their stored value.
///
/// Expected: Ok with age changed and name unchanged
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let camper = factory::camper::CamperFactory::new(db)
        .name("Alex")
        .age(10)
        .build()
        .await?;

    let updated = CamperRepository::new(db)
        .update(
            camper.id,
            UpdateCamperParams {
                name: None,
                age: Some(11),
            },
        )
        .await?;

    assert_eq!(updated.name, "Alex");
    assert_eq!(updated.age, 11);

    let stored = entity::prelude::Camper::find_by_id(camper.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.age, 11);

    Ok(())
}

/// Tests updating a camper that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_missing_camper() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = CamperRepository::new(db)
        .update(
            99,
            UpdateCamperParams {
                name: Some("Nobody".to_string()),
                age: None,
            },
        )
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
