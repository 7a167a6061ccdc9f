use super::*;

/// Tests finding an existing planet by ID.
///
/// Expected: Ok(Some(Planet)) with matching data
#[tokio::test]
async fn finds_existing_planet() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Planet)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::planet::PlanetFactory::new(db)
        .name("Hoth")
        .climate(Some("frozen"))
        .build()
        .await?;

    let planet = PlanetRepository::new(db)
        .find_by_id(created.id)
        .await?
        .expect("planet should exist");

    assert_eq!(planet.id, created.id);
    assert_eq!(planet.name, "Hoth");
    assert_eq!(planet.climate.as_deref(), Some("frozen"));

    Ok(())
}

/// Tests querying for a non-existent planet.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_planet() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Planet)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = PlanetRepository::new(db).find_by_id(31337).await?;

    assert!(result.is_none());

    Ok(())
}
