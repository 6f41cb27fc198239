use super::*;

/// Tests deleting a camper directly in the store.
///
/// The API has no camper delete endpoint; the foreign key's `ON DELETE CASCADE` must still
/// remove the camper's signups when a camper row is deleted by other means.
///
/// Expected: Ok with the camper's signups removed
#[tokio::test]
async fn deleting_camper_removes_its_signups() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (camper, activity, _) = factory::helpers::create_signup_with_dependencies(db).await?;
    factory::create_signup(db, camper.id, activity.id).await?;
    let other = factory::create_camper(db).await?;
    factory::create_signup(db, other.id, activity.id).await?;

    entity::prelude::Camper::delete_by_id(camper.id)
        .exec(db)
        .await?;

    let remaining = entity::prelude::Signup::find().all(db).await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].camper_id, other.id);

    Ok(())
}
