use super::*;

/// Tests that exams are listed most recent date first.
///
/// Expected: Ok with dates in descending order
#[tokio::test]
async fn lists_exams_by_date_descending() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (module, student) = factory::helpers::create_enrolled_pair(db).await?;
    for data in ["2024-06-01", "2025-03-20", "2024-12-31"] {
        factory::exam::ExamFactory::new(db, &student.id, &module)
            .data(data)
            .build()
            .await?;
    }

    let exams = ExamRepository::new(db).get_all().await?;
    let dates: Vec<_> = exams.iter().map(|e| e.data.as_str()).collect();

    assert_eq!(dates, vec!["2025-03-20", "2024-12-31", "2024-06-01"]);

    Ok(())
}
