use super::*;

/// Tests that new bookings start out waiting.
///
/// Expected: Ok(Booking) with status Waiting and the requested window
#[tokio::test]
async fn creates_waiting_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, item, booker) = factory::helpers::create_item_with_booker(db).await?;
    let start = Utc::now() + Duration::days(1);
    let end = start + Duration::hours(3);

    let repo = BookingRepository::new(db);
    let booking = repo
        .create(CreateBookingParams {
            item_id: item.id,
            booker_id: booker.id,
            start,
            end,
        })
        .await?;

    assert_eq!(booking.status, BookingStatus::Waiting);
    assert_eq!(booking.item_id, item.id);
    assert_eq!(booking.booker_id, booker.id);
    assert!(booking.start < booking.end);

    Ok(())
}
