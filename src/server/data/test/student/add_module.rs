use super::*;

/// Tests adding a module to a student's list twice.
///
/// Expected: true then false, with a single entry stored
#[tokio::test]
async fn adds_module_once() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_student(db).await?;
    let module = factory::create_module(db).await?;
    let student_id = record_id(&student.id);
    let module_id = record_id(&module.id);

    let repo = StudentRepository::new(db);

    assert!(repo.add_module(&student_id, &module_id).await?);
    assert!(!repo.add_module(&student_id, &module_id).await?);

    let stored = repo.get_by_id(&student_id).await?.unwrap();
    assert_eq!(stored.modules_ids, vec![module.id]);

    Ok(())
}

/// Tests adding a module to a student that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_missing_student() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = StudentRepository::new(db)
        .add_module(&RecordId::generate(), &RecordId::generate())
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}

/// Tests adding different modules to one student from concurrent tasks.
///
/// Expected: all six modules stored on the student
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_adds_keep_every_module() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_student(db).await?;

    let mut tasks = tokio::task::JoinSet::new();
    for _ in 0..6 {
        let db = db.clone();
        let student_id = record_id(&student.id);
        tasks.spawn(async move {
            StudentRepository::new(&db)
                .add_module(&student_id, &RecordId::generate())
                .await
        });
    }
    while let Some(result) = tasks.join_next().await {
        assert!(result.unwrap()?);
    }

    let stored = StudentRepository::new(db)
        .get_by_id(&record_id(&student.id))
        .await?
        .unwrap();

    assert_eq!(stored.modules_ids.len(), 6);

    Ok(())
}
