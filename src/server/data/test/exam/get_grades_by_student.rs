use super::*;

/// Tests collecting the grades of one student only.
///
/// Expected: Ok with the student's three grades
#[tokio::test]
async fn collects_grades_of_student() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (module, student) = factory::helpers::create_enrolled_pair(db).await?;
    let other = factory::create_student(db).await?;

    for voto in [20, 24, 30] {
        factory::exam::ExamFactory::new(db, &student.id, &module)
            .voto(voto)
            .build()
            .await?;
    }
    factory::exam::ExamFactory::new(db, &other.id, &module)
        .voto(18)
        .build()
        .await?;

    let mut grades = ExamRepository::new(db)
        .get_grades_by_student(&record_id(&student.id))
        .await?;
    grades.sort();

    assert_eq!(grades, vec![20, 24, 30]);

    Ok(())
}

/// Tests collecting grades for a student without exams.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_no_grades_without_exams() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let grades = ExamRepository::new(db)
        .get_grades_by_student(&RecordId::generate())
        .await?;

    assert!(grades.is_empty());

    Ok(())
}
