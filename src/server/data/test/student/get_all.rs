use super::*;

/// Tests that students are listed by surname ascending.
///
/// Expected: Ok with students in alphabetical surname order
#[tokio::test]
async fn lists_students_by_surname() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for cognome in ["Verdi", "Bianchi", "Neri"] {
        factory::student::StudentFactory::new(db)
            .cognome(cognome)
            .build()
            .await?;
    }

    let students = StudentRepository::new(db).get_all().await?;
    let surnames: Vec<_> = students.iter().map(|s| s.cognome.as_str()).collect();

    assert_eq!(surnames, vec!["Bianchi", "Neri", "Verdi"]);

    Ok(())
}
