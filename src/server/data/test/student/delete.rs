use super::*;

/// Tests deleting a student, existing and missing.
///
/// Expected: Ok(1) for the stored student, then Ok(0)
#[tokio::test]
async fn deletes_student_once() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_student(db).await?;
    let id = record_id(&student.id);

    let repo = StudentRepository::new(db);

    assert_eq!(repo.delete(&id).await?, 1);
    assert_eq!(repo.delete(&id).await?, 0);
    assert!(repo.get_by_id(&id).await?.is_none());

    Ok(())
}
