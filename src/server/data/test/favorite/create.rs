use super::*;

use sea_orm::SqlErr;

/// Tests creating a planet favorite.
///
/// Verifies the row is stored with the planet kind tag and target ID.
///
/// Expected: Ok(Favorite) with generated ID
#[tokio::test]
async fn creates_planet_favorite() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _, planet) = factory::helpers::create_catalog(db).await?;

    let favorite = FavoriteRepository::new(db)
        .create(AddFavoriteParam {
            user_id: user.id,
            target: FavoriteTarget::Planet(planet.id),
        })
        .await?;

    assert!(favorite.id > 0);
    assert_eq!(favorite.user_id, user.id);
    assert_eq!(favorite.target, FavoriteTarget::Planet(planet.id));

    let stored = entity::prelude::Favorite::find_by_id(favorite.id)
        .one(db)
        .await?
        .expect("favorite should be stored");
    assert_eq!(stored.target_kind, entity::favorite::TargetKind::Planet);
    assert_eq!(stored.target_id, planet.id);

    Ok(())
}

/// Tests the same target ID under different kinds are distinct favorites.
///
/// Expected: Ok for both inserts
#[tokio::test]
async fn allows_same_id_for_different_kinds() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let repo = FavoriteRepository::new(db);

    let planet = repo
        .create(AddFavoriteParam {
            user_id: user.id,
            target: FavoriteTarget::Planet(1),
        })
        .await?;
    let person = repo
        .create(AddFavoriteParam {
            user_id: user.id,
            target: FavoriteTarget::Person(1),
        })
        .await?;

    assert_ne!(planet.id, person.id);

    Ok(())
}

/// Tests the store rejects a duplicate favorite on its own.
///
/// Inserts the same `(user, kind, target)` twice without any prior lookup, as two
/// racing requests would.
///
/// Expected: Err(DbErr) classified as a unique constraint violation
#[tokio::test]
async fn rejects_duplicate_favorite() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, person, _) = factory::helpers::create_catalog(db).await?;
    let repo = FavoriteRepository::new(db);
    let param = AddFavoriteParam {
        user_id: user.id,
        target: FavoriteTarget::Person(person.id),
    };

    repo.create(param.clone()).await?;
    let result = repo.create(param).await;

    let err = result.expect_err("duplicate favorite should be rejected");
    assert!(matches!(
        err.sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}
