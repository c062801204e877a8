use super::*;

/// Tests creating a module with an empty enrollment list.
///
/// Expected: Ok with the module stored under the given identity
#[tokio::test]
async fn creates_module() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ModuleRepository::new(db);
    let id = RecordId::generate();
    let module = repo.create(&id, fields("ITS-PYT")).await?;

    assert_eq!(module.id, id.to_string());
    assert_eq!(module.codice, "ITS-PYT");
    assert_eq!(module.ore_totali, 60);
    assert!(module.studenti_ids.is_empty());

    let stored = entity::prelude::Module::find_by_id(id.as_str())
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.nome, "Programmazione Python");
    assert!(stored.studenti_ids.0.is_empty());

    Ok(())
}

/// Tests that the storage rejects a second module with the same code.
///
/// Expected: Err recognised as a unique constraint violation
#[tokio::test]
async fn rejects_duplicate_codice() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ModuleRepository::new(db);
    repo.create(&RecordId::generate(), fields("ITS-PYT")).await?;

    let result = repo.create(&RecordId::generate(), fields("ITS-PYT")).await;

    let err = result.unwrap_err();
    assert!(matches!(
        err.sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}
