use super::*;

/// Tests a partial update that only changes the name.
///
/// Expected: Ok(User) with the new name and the original email
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let updated = repo
        .update(UpdateUserParams {
            id: user.id,
            name: Some("Renamed".to_string()),
            email: None,
        })
        .await?;

    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.email, user.email);

    Ok(())
}

/// Tests updating a user that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_nonexistent_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo
        .update(UpdateUserParams {
            id: 999,
            name: Some("Ghost".to_string()),
            email: None,
        })
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
