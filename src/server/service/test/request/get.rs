use super::*;

/// Tests that own and others' listings split requests by creator.
///
/// Expected: Ok with each listing containing only the matching creator's requests
#[tokio::test]
async fn splits_own_and_others() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let me = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let mine = factory::create_item_request(db, me.id).await?;
    let theirs = factory::create_item_request(db, other.id).await?;

    let service = ItemRequestService::new(db);
    let own = service.get_own(me.id).await.unwrap();
    let others = service.get_others(me.id, Page::default()).await.unwrap();

    assert_eq!(own.iter().map(|r| r.id).collect::<Vec<_>>(), vec![mine.id]);
    assert_eq!(
        others.iter().map(|r| r.id).collect::<Vec<_>>(),
        vec![theirs.id]
    );

    Ok(())
}

/// Tests reading another user's request with its offered items.
///
/// Expected: Ok(ItemRequest) with the offered item
#[tokio::test]
async fn any_user_reads_request_with_items() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = factory::create_user(db).await?;
    let owner = factory::create_user(db).await?;
    let request = factory::create_item_request(db, creator.id).await?;
    let offered = ItemFactory::new(db, owner.id)
        .request_id(request.id)
        .build()
        .await?;

    let service = ItemRequestService::new(db);
    let found = service.get_by_id(request.id, owner.id).await.unwrap();

    assert_eq!(
        found.items.iter().map(|i| i.id).collect::<Vec<_>>(),
        vec![offered.id]
    );

    Ok(())
}

/// Tests reading a missing request.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn not_found_for_missing_request() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let service = ItemRequestService::new(db);
    let result = service.get_by_id(5_000, user.id).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
