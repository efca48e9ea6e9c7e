use super::*;

/// Tests keeping one's own email while renaming.
///
/// Expected: Ok(User) without a conflict
#[tokio::test]
async fn allows_own_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let service = UserService::new(db);
    let updated = service
        .update(UpdateUserParams {
            id: user.id,
            name: Some("New Name".to_string()),
            email: Some(user.email.to_uppercase()),
        })
        .await
        .unwrap();

    assert_eq!(updated.name, "New Name");

    Ok(())
}

/// Tests taking another user's email.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn conflicts_on_other_users_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;

    let service = UserService::new(db);
    let result = service
        .update(UpdateUserParams {
            id: user.id,
            name: None,
            email: Some(other.email),
        })
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests updating a missing user.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn not_found_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = UserService::new(db);
    let result = service
        .update(UpdateUserParams {
            id: 12,
            name: Some("Ghost".to_string()),
            email: None,
        })
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
