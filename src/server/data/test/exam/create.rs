use super::*;

/// Tests creating an exam with the snapshot stored as passed.
///
/// Expected: Ok with every field persisted
#[tokio::test]
async fn creates_exam_with_snapshot() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (module, student) = factory::helpers::create_enrolled_pair(db).await?;

    let repo = ExamRepository::new(db);
    let id = RecordId::generate();
    let exam = repo.create(&id, param(&student.id, &module.id, 27)).await?;

    assert_eq!(exam.id, id.to_string());
    assert_eq!(exam.student_id, student.id);
    assert_eq!(exam.module_id, module.id);
    assert_eq!(exam.voto, 27);

    let stored = repo.get_by_id(&id).await?.unwrap();
    assert_eq!(stored.modulo_snapshot, snapshot("ITS-NET"));
    assert_eq!(stored.data, "2025-02-10");

    Ok(())
}
