use super::*;

/// Tests that modules are listed by name ascending.
///
/// Expected: Ok with modules in alphabetical order
#[tokio::test]
async fn lists_modules_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for nome in ["Sistemi Operativi", "Algoritmi", "Reti"] {
        factory::module::ModuleFactory::new(db)
            .nome(nome)
            .build()
            .await?;
    }

    let modules = ModuleRepository::new(db).get_all().await?;
    let names: Vec<_> = modules.iter().map(|m| m.nome.as_str()).collect();

    assert_eq!(names, vec!["Algoritmi", "Reti", "Sistemi Operativi"]);

    Ok(())
}

/// Tests listing with no modules stored.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_list() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(ModuleRepository::new(db).get_all().await?.is_empty());

    Ok(())
}
