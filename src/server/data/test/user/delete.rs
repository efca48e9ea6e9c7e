use super::*;
use sea_orm::EntityTrait;

/// Tests that deleting a user removes their items.
///
/// Expected: Ok(true) and no remaining items for the user
#[tokio::test]
async fn deletes_user_and_cascades_to_items() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::create_item(db, user.id).await?;

    let repo = UserRepository::new(db);
    let deleted = repo.delete(user.id).await?;

    assert!(deleted);
    assert!(!repo.exists(user.id).await?);
    assert!(entity::prelude::Item::find().all(db).await?.is_empty());

    Ok(())
}

/// Tests deleting a user that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_nonexistent_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    assert!(!repo.delete(42).await?);

    Ok(())
}
