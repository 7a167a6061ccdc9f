use super::*;

/// Tests listing every planet in the catalog.
///
/// Expected: Ok with all planets ordered by ID
#[tokio::test]
async fn returns_all_planets() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Planet)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let tatooine = factory::create_planet(db).await?;
    let alderaan = factory::create_planet(db).await?;
    let yavin = factory::create_planet(db).await?;

    let planets = PlanetRepository::new(db).get_all().await?;

    let ids: Vec<i32> = planets.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![tatooine.id, alderaan.id, yavin.id]);

    Ok(())
}
