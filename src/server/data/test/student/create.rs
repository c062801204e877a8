use super::*;

/// Tests creating a student with an empty module list.
///
/// Expected: Ok with the student stored under the given identity
#[tokio::test]
async fn creates_student() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StudentRepository::new(db);
    let id = RecordId::generate();
    let student = repo.create(&id, fields("giulia.bianchi@its.edu")).await?;

    assert_eq!(student.id, id.to_string());
    assert_eq!(student.email, "giulia.bianchi@its.edu");
    assert!(student.modules_ids.is_empty());
    assert!(repo.exists(&id).await?);

    Ok(())
}

/// Tests that the storage rejects a second student with the same email.
///
/// Expected: Err recognised as a unique constraint violation
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StudentRepository::new(db);
    repo.create(&RecordId::generate(), fields("dup@its.edu"))
        .await?;

    let err = repo
        .create(&RecordId::generate(), fields("dup@its.edu"))
        .await
        .unwrap_err();

    assert!(matches!(
        err.sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}
