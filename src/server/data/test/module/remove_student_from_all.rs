use super::*;

/// Tests removing a student from every module that lists it.
///
/// Expected: Ok(2) with other students and unrelated modules untouched
#[tokio::test]
async fn removes_student_from_listing_modules() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student_id = RecordId::generate();
    let other_id = RecordId::generate();

    let both = factory::module::ModuleFactory::new(db)
        .studenti_ids(vec![student_id.to_string(), other_id.to_string()])
        .build()
        .await?;
    let only = factory::module::ModuleFactory::new(db)
        .studenti_ids(vec![student_id.to_string()])
        .build()
        .await?;
    let unrelated = factory::module::ModuleFactory::new(db)
        .studenti_ids(vec![other_id.to_string()])
        .build()
        .await?;

    let repo = ModuleRepository::new(db);
    let changed = repo.remove_student_from_all(&student_id).await?;

    assert_eq!(changed, 2);

    let both = repo.get_by_id(&record_id(&both.id)).await?.unwrap();
    assert_eq!(both.studenti_ids, vec![other_id.to_string()]);

    let only = repo.get_by_id(&record_id(&only.id)).await?.unwrap();
    assert!(only.studenti_ids.is_empty());

    let unrelated = repo.get_by_id(&record_id(&unrelated.id)).await?.unwrap();
    assert_eq!(unrelated.studenti_ids, vec![other_id.to_string()]);

    Ok(())
}

/// Tests removing a student no module lists.
///
/// Expected: Ok(0)
#[tokio::test]
async fn changes_nothing_when_not_enrolled() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_module(db).await?;

    let changed = ModuleRepository::new(db)
        .remove_student_from_all(&RecordId::generate())
        .await?;

    assert_eq!(changed, 0);

    Ok(())
}
