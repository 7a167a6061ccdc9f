use super::*;

/// Tests listing returns only the requested user's favorites.
///
/// Expected: Ok with the owner's favorites in creation order
#[tokio::test]
async fn returns_only_favorites_of_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, person, planet) = factory::helpers::create_catalog(db).await?;
    let other = factory::create_user(db).await?;

    let first = factory::create_planet_favorite(db, user.id, planet.id).await?;
    let second = factory::create_person_favorite(db, user.id, person.id).await?;
    factory::create_planet_favorite(db, other.id, planet.id).await?;

    let favorites = FavoriteRepository::new(db).get_by_user(user.id).await?;

    assert_eq!(favorites.len(), 2);
    assert_eq!(favorites[0].id, first.id);
    assert_eq!(favorites[0].target, FavoriteTarget::Planet(planet.id));
    assert_eq!(favorites[1].id, second.id);
    assert_eq!(favorites[1].target, FavoriteTarget::Person(person.id));

    Ok(())
}

/// Tests a user without favorites.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_for_user_without_favorites() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let favorites = FavoriteRepository::new(db).get_by_user(user.id).await?;

    assert!(favorites.is_empty());

    Ok(())
}
