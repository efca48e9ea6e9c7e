use super::*;

/// Tests picking the last and next bookings around now.
///
/// Verifies that the latest finished booking and the earliest upcoming booking
/// are chosen regardless of status.
///
/// Expected: Ok with the rejected bookings picked as last and next
#[tokio::test]
async fn picks_closest_bookings_of_any_status() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, item, booker) = factory::helpers::create_item_with_booker(db).await?;
    let now = Utc::now();

    BookingFactory::new(db, item.id, booker.id)
        .start(now - Duration::days(10))
        .end(now - Duration::days(9))
        .status(BookingStatus::Approved)
        .build()
        .await?;
    BookingFactory::new(db, item.id, booker.id)
        .start(now - Duration::days(3))
        .end(now - Duration::days(2))
        .status(BookingStatus::Approved)
        .build()
        .await?;
    let last = BookingFactory::new(db, item.id, booker.id)
        .start(now - Duration::hours(30))
        .end(now - Duration::hours(20))
        .status(BookingStatus::Rejected)
        .build()
        .await?;

    BookingFactory::new(db, item.id, booker.id)
        .start(now + Duration::days(1))
        .end(now + Duration::days(2))
        .build()
        .await?;
    BookingFactory::new(db, item.id, booker.id)
        .start(now + Duration::days(5))
        .end(now + Duration::days(6))
        .status(BookingStatus::Approved)
        .build()
        .await?;
    let next = BookingFactory::new(db, item.id, booker.id)
        .start(now + Duration::hours(2))
        .end(now + Duration::hours(3))
        .status(BookingStatus::Rejected)
        .build()
        .await?;

    let repo = BookingRepository::new(db);
    let lasts = repo.get_last_for_items(vec![item.id], Utc::now()).await?;
    let nexts = repo.get_next_for_items(vec![item.id], Utc::now()).await?;

    assert_eq!(lasts.get(&item.id).map(|b| b.id), Some(last.id));
    assert_eq!(nexts.get(&item.id).map(|b| b.id), Some(next.id));

    Ok(())
}

/// Tests items without surrounding bookings.
///
/// Expected: Ok with empty maps
#[tokio::test]
async fn returns_empty_without_bookings() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let item = factory::create_item(db, owner.id).await?;

    let repo = BookingRepository::new(db);

    assert!(repo
        .get_last_for_items(vec![item.id], Utc::now())
        .await?
        .is_empty());
    assert!(repo
        .get_next_for_items(vec![item.id], Utc::now())
        .await?
        .is_empty());

    Ok(())
}
