use super::*;

/// Tests that only the owner may update an item.
///
/// Expected: Err(AppError::Forbidden) for another user
#[tokio::test]
async fn forbids_update_by_non_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, item, stranger) = factory::helpers::create_item_with_booker(db).await?;

    let service = ItemService::new(db);
    let result = service
        .update(UpdateItemParams {
            id: item.id,
            requester_id: stranger.id,
            name: Some("Stolen".to_string()),
            description: None,
            available: None,
        })
        .await;

    assert!(matches!(result, Err(AppError::Forbidden(_))));

    Ok(())
}

/// Tests updating a missing item.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn not_found_for_missing_item() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;

    let service = ItemService::new(db);
    let result = service
        .update(UpdateItemParams {
            id: 404,
            requester_id: owner.id,
            name: None,
            description: None,
            available: Some(false),
        })
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests that only the owner may delete an item.
///
/// Expected: Err(AppError::Forbidden) for another user, Ok(()) for the owner
#[tokio::test]
async fn only_owner_deletes() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, item, stranger) = factory::helpers::create_item_with_booker(db).await?;

    let service = ItemService::new(db);

    assert!(matches!(
        service.delete(item.id, stranger.id).await,
        Err(AppError::Forbidden(_))
    ));
    assert!(service.delete(item.id, owner.id).await.is_ok());
    assert!(matches!(
        service.get_by_id(item.id, owner.id).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}
