use super::*;

fn params(owner_id: i32, request_id: Option<i32>) -> CreateItemParams {
    CreateItemParams {
        owner_id,
        name: "Tent".to_string(),
        description: "Two person tent".to_string(),
        available: true,
        request_id,
    }
}

/// Tests listing an item for a missing owner.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn not_found_for_missing_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = ItemService::new(db);
    let result = service.create(params(77, None)).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests listing an item in answer to a missing request.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn not_found_for_missing_request() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;

    let service = ItemService::new(db);
    let result = service.create(params(owner.id, Some(55))).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests listing an item in answer to an existing request.
///
/// Expected: Ok(Item) linked to the request
#[tokio::test]
async fn creates_item_for_existing_request() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let requester = factory::create_user(db).await?;
    let owner = factory::create_user(db).await?;
    let request = factory::create_item_request(db, requester.id).await?;

    let service = ItemService::new(db);
    let item = service
        .create(params(owner.id, Some(request.id)))
        .await
        .unwrap();

    assert_eq!(item.request_id, Some(request.id));

    Ok(())
}
