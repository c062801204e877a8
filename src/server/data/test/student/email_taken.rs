use super::*;

/// Tests detecting an email used by another student.
///
/// Expected: true without exclusion, false when excluding the owner
#[tokio::test]
async fn detects_email_owned_by_other_student() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::student::StudentFactory::new(db)
        .email("anna.neri@its.edu")
        .build()
        .await?;
    let owner = record_id(&student.id);

    let repo = StudentRepository::new(db);

    assert!(repo.email_taken("anna.neri@its.edu", None).await?);
    assert!(!repo.email_taken("anna.neri@its.edu", Some(&owner)).await?);
    assert!(!repo.email_taken("altro@its.edu", None).await?);

    Ok(())
}
