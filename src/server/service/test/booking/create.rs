use super::*;

fn window(
    item_id: i32,
    booker_id: i32,
    start_in: Duration,
    length: Duration,
) -> CreateBookingParams {
    let start = Utc::now() + start_in;
    CreateBookingParams {
        item_id,
        booker_id,
        start,
        end: start + length,
    }
}

/// Tests booking an available item of another user.
///
/// Expected: Ok(BookingDetails) in the Waiting status
#[tokio::test]
async fn creates_waiting_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, item, booker) = factory::helpers::create_item_with_booker(db).await?;

    let service = BookingService::new(db);
    let details = service
        .create(window(item.id, booker.id, Duration::days(1), Duration::days(1)))
        .await
        .unwrap();

    assert_eq!(details.booking.status, BookingStatus::Waiting);
    assert_eq!(details.booker.id, booker.id);
    assert_eq!(details.item.id, item.id);

    Ok(())
}

/// Tests a booking whose start lies in the past.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_start_in_past() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, item, booker) = factory::helpers::create_item_with_booker(db).await?;

    let service = BookingService::new(db);
    let result = service
        .create(window(item.id, booker.id, -Duration::days(1), Duration::days(2)))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests a booking ending before it starts.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_end_before_start() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, item, booker) = factory::helpers::create_item_with_booker(db).await?;

    let service = BookingService::new(db);
    let result = service
        .create(window(item.id, booker.id, Duration::days(2), -Duration::hours(5)))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests an owner booking their own item.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn owner_cannot_book_own_item() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, item, _booker) = factory::helpers::create_item_with_booker(db).await?;

    let service = BookingService::new(db);
    let result = service
        .create(window(item.id, owner.id, Duration::days(1), Duration::days(1)))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests booking an unavailable item.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_unavailable_item() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let booker = factory::create_user(db).await?;
    let item = ItemFactory::new(db, owner.id).available(false).build().await?;

    let service = BookingService::new(db);
    let result = service
        .create(window(item.id, booker.id, Duration::days(1), Duration::days(1)))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests booking a missing item or as a missing user.
///
/// Expected: Err(AppError::NotFound) in both cases
#[tokio::test]
async fn not_found_for_missing_item_or_booker() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, item, booker) = factory::helpers::create_item_with_booker(db).await?;

    let service = BookingService::new(db);

    assert!(matches!(
        service
            .create(window(8_888, booker.id, Duration::days(1), Duration::days(1)))
            .await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        service
            .create(window(item.id, 8_888, Duration::days(1), Duration::days(1)))
            .await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}
