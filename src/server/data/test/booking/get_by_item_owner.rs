use super::*;

/// Tests listing bookings of the owner's items.
///
/// Verifies that bookings of items owned by someone else are excluded.
///
/// Expected: Ok with the bookings of the owner's item only
#[tokio::test]
async fn returns_bookings_of_owned_items() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, item, booker) = factory::helpers::create_item_with_booker(db).await?;
    let other_item = factory::create_item(db, booker.id).await?;

    let own = factory::create_booking(db, item.id, booker.id).await?;
    factory::create_booking(db, other_item.id, owner.id).await?;

    let repo = BookingRepository::new(db);
    let bookings = repo
        .get_by_item_owner(owner.id, BookingState::All, Utc::now(), 0, 10)
        .await?;

    assert_eq!(
        bookings.iter().map(|b| b.booking.id).collect::<Vec<_>>(),
        vec![own.id]
    );

    Ok(())
}

/// Tests that the state filter applies to owner listings too.
///
/// Expected: Ok with only the waiting booking
#[tokio::test]
async fn applies_state_filter() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, item, booker) = factory::helpers::create_item_with_booker(db).await?;

    let waiting = factory::create_booking(db, item.id, booker.id).await?;
    BookingFactory::new(db, item.id, booker.id)
        .status(BookingStatus::Approved)
        .build()
        .await?;

    let repo = BookingRepository::new(db);
    let bookings = repo
        .get_by_item_owner(owner.id, BookingState::Waiting, Utc::now(), 0, 10)
        .await?;

    assert_eq!(bookings.len(), 1);
    assert_eq!(bookings[0].booking.id, waiting.id);

    Ok(())
}
