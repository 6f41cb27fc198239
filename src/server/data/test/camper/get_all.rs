use super::*;

/// Tests listing campers.
///
/// Verifies that every camper is returned in ID order.
///
/// Expected: Ok with campers ordered by ID
#[tokio::test]
async fn returns_all_campers_in_id_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_camper(db).await?;
    let second = factory::create_camper(db).await?;
    let third = factory::create_camper(db).await?;

    let campers = CamperRepository::new(db).get_all().await?;

    let ids: Vec<i32> = campers.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![first.id, second.id, third.id]);

    Ok(())
}

/// Tests listing campers on an empty table.
///
/// Expected: Ok with empty list
#[tokio::test]
async fn returns_empty_list_without_campers() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let campers = CamperRepository::new(db).get_all().await?;

    assert!(campers.is_empty());

    Ok(())
}
