use super::*;

/// Tests detecting a code used by another module.
///
/// Expected: true without exclusion, false when excluding the owner
#[tokio::test]
async fn detects_code_owned_by_other_module() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let module = factory::module::ModuleFactory::new(db)
        .codice("ITS-DBA")
        .build()
        .await?;
    let owner = record_id(&module.id);

    let repo = ModuleRepository::new(db);

    assert!(repo.codice_taken("ITS-DBA", None).await?);
    assert!(!repo.codice_taken("ITS-DBA", Some(&owner)).await?);
    assert!(repo
        .codice_taken("ITS-DBA", Some(&RecordId::generate()))
        .await?);
    assert!(!repo.codice_taken("ITS-WEB", None).await?);

    Ok(())
}
