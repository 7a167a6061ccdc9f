use super::*;

/// Tests finding a favorite the user holds.
///
/// Expected: Ok(Some(Favorite))
#[tokio::test]
async fn finds_existing_favorite() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, person, _) = factory::helpers::create_catalog(db).await?;
    let created = factory::create_person_favorite(db, user.id, person.id).await?;

    let found = FavoriteRepository::new(db)
        .find_by_user_and_target(user.id, FavoriteTarget::Person(person.id))
        .await?;

    assert_eq!(found.map(|f| f.id), Some(created.id));

    Ok(())
}

/// Tests a favorite of another user is not returned.
///
/// Expected: Ok(None)
#[tokio::test]
async fn ignores_favorites_of_other_users() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, _, planet) = factory::helpers::create_catalog(db).await?;
    let other = factory::create_user(db).await?;
    factory::create_planet_favorite(db, owner.id, planet.id).await?;

    let found = FavoriteRepository::new(db)
        .find_by_user_and_target(other.id, FavoriteTarget::Planet(planet.id))
        .await?;

    assert!(found.is_none());

    Ok(())
}

/// Tests the kind is part of the lookup.
///
/// A planet favorite must not match a person lookup carrying the same ID.
///
/// Expected: Ok(None)
#[tokio::test]
async fn distinguishes_target_kind() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::create_planet_favorite(db, user.id, 4).await?;

    let found = FavoriteRepository::new(db)
        .find_by_user_and_target(user.id, FavoriteTarget::Person(4))
        .await?;

    assert!(found.is_none());

    Ok(())
}
