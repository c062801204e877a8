use super::*;

/// Tests updating an enrolled student's personal fields.
///
/// Expected: Ok(Some) with new fields and the module list untouched
#[tokio::test]
async fn updates_fields_and_keeps_modules() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (module, student) = factory::helpers::create_enrolled_pair(db).await?;

    let updated = StudentRepository::new(db)
        .update(&record_id(&student.id), fields("nuova@its.edu"))
        .await?
        .unwrap();

    assert_eq!(updated.nome, "Giulia");
    assert_eq!(updated.email, "nuova@its.edu");
    assert_eq!(updated.modules_ids, vec![module.id]);

    Ok(())
}

/// Tests updating a student that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_student() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = StudentRepository::new(db)
        .update(&RecordId::generate(), fields("nessuno@its.edu"))
        .await?;

    assert!(result.is_none());

    Ok(())
}
