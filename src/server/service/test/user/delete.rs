use super::*;

/// Tests deleting an existing and then a missing user.
///
/// Expected: Ok(()) then Err(AppError::NotFound)
#[tokio::test]
async fn deletes_once_then_not_found() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let service = UserService::new(db);

    assert!(service.delete(user.id).await.is_ok());
    assert!(matches!(
        service.delete(user.id).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}
