use super::*;

/// Tests deleting an exam, existing and missing.
///
/// Expected: Ok(1) then Ok(0)
#[tokio::test]
async fn deletes_exam_once() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (module, student) = factory::helpers::create_enrolled_pair(db).await?;
    let exam = factory::create_exam(db, &student.id, &module).await?;
    let id = record_id(&exam.id);

    let repo = ExamRepository::new(db);

    assert!(repo.exists(&id).await?);
    assert_eq!(repo.delete(&id).await?, 1);
    assert_eq!(repo.delete(&id).await?, 0);
    assert!(!repo.exists(&id).await?);

    Ok(())
}
