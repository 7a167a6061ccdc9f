use super::*;

/// Tests adding a planet favorite.
///
/// Expected: Ok(Favorite) owned by the user and pointing at the planet
#[tokio::test]
async fn adds_planet_favorite() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _, planet) = factory::helpers::create_catalog(db).await?;

    let favorite = FavoriteService::new(db)
        .add(AddFavoriteParam {
            user_id: user.id,
            target: FavoriteTarget::Planet(planet.id),
        })
        .await?;

    assert_eq!(favorite.user_id, user.id);
    assert_eq!(favorite.target, FavoriteTarget::Planet(planet.id));

    Ok(())
}

/// Tests adding the same favorite twice.
///
/// Expected: Err(AppError::Conflict) on the second call
#[tokio::test]
async fn rejects_duplicate_favorite() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, person, _) = factory::helpers::create_catalog(db).await?;
    let service = FavoriteService::new(db);
    let param = AddFavoriteParam {
        user_id: user.id,
        target: FavoriteTarget::Person(person.id),
    };

    service.add(param.clone()).await?;
    let result = service.add(param).await;

    assert!(matches!(
        result,
        Err(AppError::Conflict(msg)) if msg == "Person already in favorites for this user"
    ));

    Ok(())
}

/// Tests adding a favorite for an unknown user.
///
/// The user check runs before the target check.
///
/// Expected: Err(AppError::NotFound("User not found"))
#[tokio::test]
async fn rejects_unknown_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = FavoriteService::new(db)
        .add(AddFavoriteParam {
            user_id: 9000,
            target: FavoriteTarget::Planet(9000),
        })
        .await;

    assert!(matches!(result, Err(AppError::NotFound(msg)) if msg == "User not found"));

    Ok(())
}

/// Tests adding a favorite on an unknown planet.
///
/// Expected: Err(AppError::NotFound("Planet not found"))
#[tokio::test]
async fn rejects_unknown_planet() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let result = FavoriteService::new(db)
        .add(AddFavoriteParam {
            user_id: user.id,
            target: FavoriteTarget::Planet(9000),
        })
        .await;

    assert!(matches!(result, Err(AppError::NotFound(msg)) if msg == "Planet not found"));

    Ok(())
}

/// Tests adding a favorite on an unknown person.
///
/// Expected: Err(AppError::NotFound("Person not found"))
#[tokio::test]
async fn rejects_unknown_person() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let result = FavoriteService::new(db)
        .add(AddFavoriteParam {
            user_id: user.id,
            target: FavoriteTarget::Person(9000),
        })
        .await;

    assert!(matches!(result, Err(AppError::NotFound(msg)) if msg == "Person not found"));

    Ok(())
}

/// Tests kinds without a catalog cannot be favorited.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_kinds_without_catalog() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let result = FavoriteService::new(db)
        .add(AddFavoriteParam {
            user_id: user.id,
            target: FavoriteTarget::Vehicle(1),
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::BadRequest(msg)) if msg == "Vehicle favorites are not supported"
    ));

    Ok(())
}

/// Tests two concurrent adds of the same planet.
///
/// Both requests may pass the existence pre-check before either inserts; the store's
/// unique index then rejects the second insert, which must still surface as a conflict.
///
/// Expected: one Ok(Favorite) and one Err(AppError::Conflict), never Err(AppError::DbErr)
#[tokio::test]
async fn concurrent_duplicate_add_conflicts() -> Result<(), AppError> {
    use crate::server::data::favorite::FavoriteRepository;
    use sea_orm::SqlErr;

    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _, planet) = factory::helpers::create_catalog(db).await?;
    let param = AddFavoriteParam {
        user_id: user.id,
        target: FavoriteTarget::Planet(planet.id),
    };
    let first_service = FavoriteService::new(db);
    let second_service = FavoriteService::new(db);

    let (first, second) = tokio::join!(
        first_service.add(param.clone()),
        second_service.add(param.clone())
    );

    let (created, rejected) = match (first, second) {
        (Ok(favorite), Err(err)) | (Err(err), Ok(favorite)) => (favorite, err),
        other => panic!("expected one favorite and one conflict, got {other:?}"),
    };
    assert_eq!(created.target, FavoriteTarget::Planet(planet.id));
    assert!(matches!(
        rejected,
        AppError::Conflict(ref msg) if msg == "Planet already in favorites for this user"
    ));

    let err = FavoriteRepository::new(db)
        .create(param)
        .await
        .expect_err("duplicate insert should hit the unique index");
    assert!(matches!(
        err.sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}
