use super::*;
use sea_orm::EntityTrait;

/// Tests that deleting an item removes its bookings and comments.
///
/// Expected: Ok(true) and empty bookings and comments tables
#[tokio::test]
async fn deletes_item_and_cascades() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, item, booker) = factory::helpers::create_item_with_booker(db).await?;
    factory::create_booking(db, item.id, booker.id).await?;
    factory::create_comment(db, item.id, booker.id).await?;

    let repo = ItemRepository::new(db);

    assert!(repo.delete(item.id).await?);
    assert!(repo.get_by_id(item.id).await?.is_none());
    assert!(entity::prelude::Booking::find().all(db).await?.is_empty());
    assert!(entity::prelude::Comment::find().all(db).await?.is_empty());

    Ok(())
}

/// Tests deleting an item that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_nonexistent_item() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_item_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ItemRepository::new(db);

    assert!(!repo.delete(7).await?);

    Ok(())
}
