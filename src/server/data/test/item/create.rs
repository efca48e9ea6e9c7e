use super::*;

/// Tests creating an item linked to a request.
///
/// Expected: Ok(Item) carrying the request id
#[tokio::test]
async fn creates_item_for_request() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_item_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let requester = factory::create_user(db).await?;
    let owner = factory::create_user(db).await?;
    let request = factory::create_item_request(db, requester.id).await?;

    let repo = ItemRepository::new(db);
    let item = repo
        .create(CreateItemParams {
            owner_id: owner.id,
            name: "Drill".to_string(),
            description: "Cordless drill".to_string(),
            available: true,
            request_id: Some(request.id),
        })
        .await?;

    assert_eq!(item.owner_id, owner.id);
    assert_eq!(item.request_id, Some(request.id));
    assert_eq!(repo.get_by_id(item.id).await?, Some(item));

    Ok(())
}

/// Tests the owner foreign key.
///
/// Expected: Err(DbErr) for an unknown owner
#[tokio::test]
async fn fails_for_nonexistent_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_item_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ItemRepository::new(db);
    let result = repo
        .create(CreateItemParams {
            owner_id: 999,
            name: "Drill".to_string(),
            description: "Cordless drill".to_string(),
            available: true,
            request_id: None,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
