use super::*;

/// Tests listing own requests newest first.
///
/// Expected: Ok with the creator's requests ordered by creation time descending
#[tokio::test]
async fn returns_own_requests_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_item_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;

    let older = ItemRequestFactory::new(db, creator.id)
        .created(Utc::now() - Duration::days(2))
        .build()
        .await?;
    let newer = ItemRequestFactory::new(db, creator.id)
        .created(Utc::now() - Duration::hours(1))
        .build()
        .await?;
    factory::create_item_request(db, other.id).await?;

    let repo = ItemRequestRepository::new(db);
    let requests = repo.get_by_creator(creator.id).await?;

    assert_eq!(
        requests.iter().map(|r| r.id).collect::<Vec<_>>(),
        vec![newer.id, older.id]
    );

    Ok(())
}
