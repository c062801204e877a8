use super::*;

/// Tests adding a student to a module's enrollment list twice.
///
/// Expected: true then false, with a single entry stored
#[tokio::test]
async fn adds_student_once() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let module = factory::create_module(db).await?;
    let student = factory::create_student(db).await?;
    let module_id = record_id(&module.id);
    let student_id = record_id(&student.id);

    let repo = ModuleRepository::new(db);

    assert!(repo.add_student(&module_id, &student_id).await?);
    assert!(!repo.add_student(&module_id, &student_id).await?);

    let stored = repo.get_by_id(&module_id).await?.unwrap();
    assert_eq!(stored.studenti_ids, vec![student.id]);

    Ok(())
}

/// Tests adding a student to a module that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_missing_module() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ModuleRepository::new(db);
    let result = repo
        .add_student(&RecordId::generate(), &RecordId::generate())
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}

/// Tests adding different students to one module from concurrent tasks.
///
/// Expected: Ok(true) for every task and all eight students stored on the module
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_adds_keep_every_student() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let module = factory::create_module(db).await?;
    let student_ids: Vec<RecordId> = (0..8).map(|_| RecordId::generate()).collect();

    let mut tasks = tokio::task::JoinSet::new();
    for student_id in student_ids.clone() {
        let db = db.clone();
        let module_id = record_id(&module.id);
        tasks.spawn(async move {
            ModuleRepository::new(&db)
                .add_student(&module_id, &student_id)
                .await
        });
    }
    while let Some(result) = tasks.join_next().await {
        assert!(result.unwrap()?);
    }

    let stored = ModuleRepository::new(db)
        .get_by_id(&record_id(&module.id))
        .await?
        .unwrap();

    assert_eq!(stored.studenti_ids.len(), 8);
    for student_id in &student_ids {
        assert!(stored.studenti_ids.contains(&student_id.to_string()));
    }

    Ok(())
}
