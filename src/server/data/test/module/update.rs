use super::*;

/// Tests updating descriptive fields of an enrolled module.
///
/// Expected: Ok(Some) with new fields and the enrollment list untouched
#[tokio::test]
async fn updates_fields_and_keeps_enrollments() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (module, student) = factory::helpers::create_enrolled_pair(db).await?;

    let repo = ModuleRepository::new(db);
    let updated = repo
        .update(&record_id(&module.id), fields("ITS-NEW"))
        .await?
        .unwrap();

    assert_eq!(updated.codice, "ITS-NEW");
    assert_eq!(updated.nome, "Programmazione Python");
    assert_eq!(updated.studenti_ids, vec![student.id]);

    Ok(())
}

/// Tests updating a module that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_module() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ModuleRepository::new(db);
    let result = repo.update(&RecordId::generate(), fields("ITS-NEW")).await?;

    assert!(result.is_none());

    Ok(())
}
