use super::*;

/// Tests finding an existing person by ID.
///
/// Verifies every catalog attribute is carried into the domain model.
///
/// Expected: Ok(Some(Person)) with matching data
#[tokio::test]
async fn finds_existing_person() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::People)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::people::PersonFactory::new(db)
        .name("Luke Skywalker")
        .build()
        .await?;

    let person = PeopleRepository::new(db)
        .find_by_id(created.id)
        .await?
        .expect("person should exist");

    assert_eq!(person.id, created.id);
    assert_eq!(person.name, "Luke Skywalker");
    assert_eq!(person.height, created.height);
    assert_eq!(person.birth_year, created.birth_year);

    Ok(())
}

/// Tests nullable attributes survive as `None`.
///
/// Expected: Ok(Some(Person)) with gender None
#[tokio::test]
async fn keeps_missing_attributes_as_none() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::People)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::people::PersonFactory::new(db)
        .name("R2-D2")
        .gender(None)
        .build()
        .await?;

    let person = PeopleRepository::new(db)
        .find_by_id(created.id)
        .await?
        .expect("person should exist");

    assert!(person.gender.is_none());

    Ok(())
}

/// Tests querying for a non-existent person.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_person() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::People)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = PeopleRepository::new(db).find_by_id(424242).await?;

    assert!(result.is_none());

    Ok(())
}
