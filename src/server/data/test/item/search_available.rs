use super::*;
use test_utils::factory::item::ItemFactory;

/// Tests case-insensitive matching on name and description.
///
/// Expected: Ok with both items matching the text in either field
#[tokio::test]
async fn matches_name_or_description_ignoring_case() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_item_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let by_name = ItemFactory::new(db, owner.id)
        .name("Power DRILL")
        .description("Heavy duty")
        .build()
        .await?;
    let by_description = ItemFactory::new(db, owner.id)
        .name("Toolbox")
        .description("Contains a drill bit set")
        .build()
        .await?;
    ItemFactory::new(db, owner.id)
        .name("Ladder")
        .description("Aluminium")
        .build()
        .await?;

    let repo = ItemRepository::new(db);
    let items = repo.search_available("dRiLl", 0, 10).await?;

    assert_eq!(
        items.iter().map(|i| i.id).collect::<Vec<_>>(),
        vec![by_name.id, by_description.id]
    );

    Ok(())
}

/// Tests that unavailable items are excluded from search.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn excludes_unavailable_items() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_item_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    ItemFactory::new(db, owner.id)
        .name("Drill")
        .available(false)
        .build()
        .await?;

    let repo = ItemRepository::new(db);
    let items = repo.search_available("drill", 0, 10).await?;

    assert!(items.is_empty());

    Ok(())
}

/// Tests case-insensitive matching on non-ASCII letters.
///
/// Expected: Ok with the Cyrillic item found by its lowercase name
#[tokio::test]
async fn matches_cyrillic_text_ignoring_case() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_item_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let drill = ItemFactory::new(db, owner.id)
        .name("Дрель")
        .description("Простая ДРЕЛЬ")
        .build()
        .await?;

    let repo = ItemRepository::new(db);
    let items = repo.search_available("дрель", 0, 10).await?;

    assert_eq!(items.iter().map(|i| i.id).collect::<Vec<_>>(), vec![drill.id]);

    Ok(())
}

/// Tests that `LIKE` wildcards in the text match only themselves.
///
/// Expected: Ok with no items for `%` or `_`, and the item whose name holds a literal `%`
#[tokio::test]
async fn treats_wildcards_literally() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_item_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    ItemFactory::new(db, owner.id)
        .name("Drill")
        .description("Cordless")
        .build()
        .await?;
    ItemFactory::new(db, owner.id)
        .name("Ladder")
        .description("Aluminium")
        .build()
        .await?;

    let repo = ItemRepository::new(db);

    assert!(repo.search_available("%", 0, 10).await?.is_empty());
    assert!(repo.search_available("_", 0, 10).await?.is_empty());
    assert!(repo.search_available("\\", 0, 10).await?.is_empty());

    let discounted = ItemFactory::new(db, owner.id)
        .name("Saw 50% off")
        .description("Hand saw")
        .build()
        .await?;

    let items = repo.search_available("50%", 0, 10).await?;

    assert_eq!(
        items.iter().map(|i| i.id).collect::<Vec<_>>(),
        vec![discounted.id]
    );

    Ok(())
}

/// Tests that a renamed item is found by its new name.
///
/// Expected: Ok with the item matched after update but not by its old name
#[tokio::test]
async fn matches_updated_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_item_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let item = ItemFactory::new(db, owner.id)
        .name("Hammer")
        .description("Steel")
        .build()
        .await?;

    let repo = ItemRepository::new(db);
    repo.update(UpdateItemParams {
        id: item.id,
        requester_id: owner.id,
        name: Some("Шуруповёрт".to_string()),
        description: None,
        available: None,
    })
    .await?;

    assert!(repo.search_available("hammer", 0, 10).await?.is_empty());
    assert_eq!(repo.search_available("ШУРУПОВЁРТ", 0, 10).await?.len(), 1);

    Ok(())
}
