use super::*;

/// Tests listing users when none exist.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_when_no_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let users = UserRepository::new(db).get_all().await?;

    assert!(users.is_empty());

    Ok(())
}

/// Tests listing returns every user ordered by ID.
///
/// Expected: Ok with users in insertion order
#[tokio::test]
async fn returns_all_users_ordered_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_user(db).await?;
    let second = factory::create_user(db).await?;
    let third = factory::create_user(db).await?;

    let users = UserRepository::new(db).get_all().await?;

    let ids: Vec<i32> = users.iter().map(|u| u.id).collect();
    assert_eq!(ids, vec![first.id, second.id, third.id]);

    Ok(())
}
