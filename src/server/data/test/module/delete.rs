use super::*;

/// Tests deleting an existing module.
///
/// Expected: Ok(1) and the module is gone
#[tokio::test]
async fn deletes_module() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let module = factory::create_module(db).await?;
    let id = record_id(&module.id);

    let repo = ModuleRepository::new(db);
    assert_eq!(repo.delete(&id).await?, 1);
    assert!(repo.get_by_id(&id).await?.is_none());
    assert!(!repo.exists(&id).await?);

    Ok(())
}

/// Tests deleting a module that does not exist.
///
/// Expected: Ok(0)
#[tokio::test]
async fn returns_zero_for_missing_module() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ModuleRepository::new(db);

    assert_eq!(repo.delete(&RecordId::generate()).await?, 0);

    Ok(())
}
