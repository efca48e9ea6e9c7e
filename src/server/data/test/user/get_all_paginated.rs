use super::*;

/// Tests pagination with multiple pages.
///
/// Verifies that users are returned ordered by id and split into pages of
/// the requested size.
///
/// Expected: Ok with two full pages and one partial page
#[tokio::test]
async fn returns_correct_page_of_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mut ids = Vec::new();
    for _ in 0..5 {
        ids.push(factory::create_user(db).await?.id);
    }

    let repo = UserRepository::new(db);

    let first = repo.get_all_paginated(0, 2).await?;
    assert_eq!(first.iter().map(|u| u.id).collect::<Vec<_>>(), ids[0..2]);

    let second = repo.get_all_paginated(1, 2).await?;
    assert_eq!(second.iter().map(|u| u.id).collect::<Vec<_>>(), ids[2..4]);

    let last = repo.get_all_paginated(2, 2).await?;
    assert_eq!(last.len(), 1);

    Ok(())
}

/// Tests pagination with empty database.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_for_no_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let users = repo.get_all_paginated(0, 10).await?;

    assert!(users.is_empty());

    Ok(())
}
