use super::*;

/// Tests the PAST state.
///
/// Verifies that only approved bookings whose end precedes now are returned,
/// ordered by start with the latest first.
///
/// Expected: Ok with the two finished approved bookings
#[tokio::test]
async fn past_returns_finished_approved_latest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, item, booker) = factory::helpers::create_item_with_booker(db).await?;
    let now = Utc::now();

    let older = BookingFactory::new(db, item.id, booker.id)
        .start(now - Duration::days(10))
        .end(now - Duration::days(9))
        .status(BookingStatus::Approved)
        .build()
        .await?;
    let newer = BookingFactory::new(db, item.id, booker.id)
        .start(now - Duration::days(5))
        .end(now - Duration::days(4))
        .status(BookingStatus::Approved)
        .build()
        .await?;
    // Finished but rejected
    BookingFactory::new(db, item.id, booker.id)
        .past()
        .status(BookingStatus::Rejected)
        .build()
        .await?;
    // Approved but still running
    BookingFactory::new(db, item.id, booker.id)
        .current()
        .status(BookingStatus::Approved)
        .build()
        .await?;

    let repo = BookingRepository::new(db);
    let bookings = repo
        .get_by_booker(booker.id, BookingState::Past, Utc::now(), 0, 10)
        .await?;

    assert_eq!(
        bookings.iter().map(|b| b.booking.id).collect::<Vec<_>>(),
        vec![newer.id, older.id]
    );
    assert!(bookings.iter().all(|b| b.booking.end < Utc::now()));

    Ok(())
}

/// Tests the FUTURE state.
///
/// Expected: Ok with waiting and approved bookings that have not started
#[tokio::test]
async fn future_returns_upcoming_waiting_and_approved() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, item, booker) = factory::helpers::create_item_with_booker(db).await?;

    let waiting = factory::create_booking(db, item.id, booker.id).await?;
    let approved = BookingFactory::new(db, item.id, booker.id)
        .start(Utc::now() + Duration::days(3))
        .end(Utc::now() + Duration::days(4))
        .status(BookingStatus::Approved)
        .build()
        .await?;
    BookingFactory::new(db, item.id, booker.id)
        .status(BookingStatus::Rejected)
        .build()
        .await?;
    BookingFactory::new(db, item.id, booker.id)
        .past()
        .status(BookingStatus::Approved)
        .build()
        .await?;

    let repo = BookingRepository::new(db);
    let bookings = repo
        .get_by_booker(booker.id, BookingState::Future, Utc::now(), 0, 10)
        .await?;

    assert_eq!(
        bookings.iter().map(|b| b.booking.id).collect::<Vec<_>>(),
        vec![approved.id, waiting.id]
    );

    Ok(())
}

/// Tests the CURRENT state.
///
/// Expected: Ok with the running approved and rejected bookings only
#[tokio::test]
async fn current_returns_running_approved_and_rejected() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, item, booker) = factory::helpers::create_item_with_booker(db).await?;

    let approved = BookingFactory::new(db, item.id, booker.id)
        .current()
        .status(BookingStatus::Approved)
        .build()
        .await?;
    let rejected = BookingFactory::new(db, item.id, booker.id)
        .start(Utc::now() - Duration::hours(2))
        .end(Utc::now() + Duration::hours(2))
        .status(BookingStatus::Rejected)
        .build()
        .await?;
    BookingFactory::new(db, item.id, booker.id)
        .current()
        .status(BookingStatus::Waiting)
        .build()
        .await?;

    let repo = BookingRepository::new(db);
    let bookings = repo
        .get_by_booker(booker.id, BookingState::Current, Utc::now(), 0, 10)
        .await?;

    assert_eq!(
        bookings.iter().map(|b| b.booking.id).collect::<Vec<_>>(),
        vec![approved.id, rejected.id]
    );

    Ok(())
}

/// Tests the WAITING and REJECTED states.
///
/// Expected: Ok with bookings of the matching status regardless of time
#[tokio::test]
async fn status_states_ignore_time() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, item, booker) = factory::helpers::create_item_with_booker(db).await?;

    let waiting = BookingFactory::new(db, item.id, booker.id)
        .past()
        .build()
        .await?;
    let rejected = BookingFactory::new(db, item.id, booker.id)
        .status(BookingStatus::Rejected)
        .build()
        .await?;

    let repo = BookingRepository::new(db);

    let found = repo
        .get_by_booker(booker.id, BookingState::Waiting, Utc::now(), 0, 10)
        .await?;
    assert_eq!(
        found.iter().map(|b| b.booking.id).collect::<Vec<_>>(),
        vec![waiting.id]
    );

    let found = repo
        .get_by_booker(booker.id, BookingState::Rejected, Utc::now(), 0, 10)
        .await?;
    assert_eq!(
        found.iter().map(|b| b.booking.id).collect::<Vec<_>>(),
        vec![rejected.id]
    );

    Ok(())
}

/// Tests ALL with pagination and another booker's bookings present.
///
/// Expected: Ok with only the booker's bookings, split into pages
#[tokio::test]
async fn all_is_paginated_and_scoped_to_booker() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, item, booker) = factory::helpers::create_item_with_booker(db).await?;
    let stranger = factory::create_user(db).await?;

    for days in 1..=3 {
        BookingFactory::new(db, item.id, booker.id)
            .start(Utc::now() + Duration::days(days))
            .end(Utc::now() + Duration::days(days) + Duration::hours(1))
            .build()
            .await?;
    }
    factory::create_booking(db, item.id, stranger.id).await?;

    let repo = BookingRepository::new(db);

    let first = repo
        .get_by_booker(booker.id, BookingState::All, Utc::now(), 0, 2)
        .await?;
    let second = repo
        .get_by_booker(booker.id, BookingState::All, Utc::now(), 1, 2)
        .await?;

    assert_eq!(first.len(), 2);
    assert_eq!(second.len(), 1);
    assert!(first
        .iter()
        .chain(second.iter())
        .all(|b| b.booker.id == booker.id));
    assert!(first[0].booking.start > first[1].booking.start);

    Ok(())
}
