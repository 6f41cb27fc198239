use super::*;

/// Tests creating a camper.
///
/// Verifies that the repository inserts the camper and returns it with a generated ID.
///
/// Expected: Ok with camper persisted
#[tokio::test]
async fn creates_camper() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CamperRepository::new(db);
    let camper = repo
        .create(CreateCamperParams {
            name: "Alex".to_string(),
            age: 10,
        })
        .await?;

    assert_eq!(camper.name, "Alex");
    assert_eq!(camper.age, 10);

    let stored = entity::prelude::Camper::find_by_id(camper.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.name, "Alex");
    assert_eq!(stored.age, 10);

    Ok(())
}

/// Tests creating a camper inside a transaction that is never committed.
///
/// Verifies that dropping the transaction rolls the insert back.
///
/// Expected: Ok with no camper persisted
#[tokio::test]
async fn rolls_back_uncommitted_create() -> Result<(), DbErr> {
    use sea_orm::{PaginatorTrait, TransactionTrait};

    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    {
        let txn = db.begin().await?;
        CamperRepository::new(&txn)
            .create(CreateCamperParams {
                name: "Ghost".to_string(),
                age: 12,
            })
            .await?;
    }

    let count = entity::prelude::Camper::find().count(db).await?;
    assert_eq!(count, 0);

    Ok(())
}
