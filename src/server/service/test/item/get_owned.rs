use super::*;

/// Tests the owner listing attaches bookings and comments per item.
///
/// Expected: Ok with each item carrying only its own comments and bookings
#[tokio::test]
async fn attaches_details_to_each_item() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, first, booker) = factory::helpers::create_item_with_booker(db).await?;
    let second = factory::create_item(db, owner.id).await?;

    let next = factory::create_booking(db, second.id, booker.id).await?;
    factory::create_comment(db, first.id, booker.id).await?;
    factory::create_comment(db, first.id, booker.id).await?;

    let service = ItemService::new(db);
    let items = service.get_owned(owner.id, Page::default()).await.unwrap();

    assert_eq!(items.len(), 2);
    assert_eq!(items[0].item.id, first.id);
    assert_eq!(items[0].comments.len(), 2);
    assert!(items[0].next_booking.is_none());
    assert_eq!(items[1].item.id, second.id);
    assert!(items[1].comments.is_empty());
    assert_eq!(items[1].next_booking.as_ref().map(|b| b.id), Some(next.id));

    Ok(())
}
