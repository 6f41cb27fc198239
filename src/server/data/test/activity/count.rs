use super::*;

/// Tests counting activities after inserting through the repository.
///
/// Expected: Ok with count matching inserted activities
#[tokio::test]
async fn counts_created_activities() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ActivityRepository::new(db);
    assert_eq!(repo.count().await?, 0);

    let archery = repo
        .create(CreateActivityParams {
            name: "Archery".to_string(),
            difficulty: 2,
        })
        .await?;
    repo.create(CreateActivityParams {
        name: "Hiking".to_string(),
        difficulty: 1,
    })
    .await?;

    assert_eq!(archery.name.as_deref(), Some("Archery"));
    assert_eq!(archery.difficulty, Some(2));
    assert_eq!(repo.count().await?, 2);

    Ok(())
}
