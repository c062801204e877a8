use super::*;

/// Tests replacing every field of an exam.
///
/// Expected: Ok(Some) with the new snapshot and grade
#[tokio::test]
async fn replaces_exam_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (module, student) = factory::helpers::create_enrolled_pair(db).await?;
    let exam = factory::create_exam(db, &student.id, &module).await?;

    let mut replacement = param(&student.id, &module.id, 30);
    replacement.modulo_snapshot = snapshot("ITS-NET2");
    replacement.note = "Lode".to_string();

    let updated = ExamRepository::new(db)
        .update(&record_id(&exam.id), replacement)
        .await?
        .unwrap();

    assert_eq!(updated.voto, 30);
    assert_eq!(updated.note, "Lode");
    assert_eq!(updated.modulo_snapshot.codice, "ITS-NET2");

    Ok(())
}

/// Tests updating an exam that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_exam() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (module, student) = factory::helpers::create_enrolled_pair(db).await?;

    let result = ExamRepository::new(db)
        .update(&RecordId::generate(), param(&student.id, &module.id, 20))
        .await?;

    assert!(result.is_none());

    Ok(())
}
