use super::*;

/// Tests that only the owner's items are returned, ordered by id.
///
/// Expected: Ok with the owner's two items
#[tokio::test]
async fn returns_only_owned_items() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_item_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let first = factory::create_item(db, owner.id).await?;
    factory::create_item(db, other.id).await?;
    let second = factory::create_item(db, owner.id).await?;

    let repo = ItemRepository::new(db);
    let items = repo.get_by_owner_paginated(owner.id, 0, 10).await?;

    assert_eq!(
        items.iter().map(|i| i.id).collect::<Vec<_>>(),
        vec![first.id, second.id]
    );

    Ok(())
}

/// Tests a page beyond the owner's items.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_past_last_page() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_item_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    factory::create_item(db, owner.id).await?;

    let repo = ItemRepository::new(db);
    let items = repo.get_by_owner_paginated(owner.id, 1, 10).await?;

    assert!(items.is_empty());

    Ok(())
}
