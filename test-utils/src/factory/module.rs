//! Module factory for creating test module entities.

use crate::factory::helpers::{new_record_id, next_id};
use entity::value::IdList;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test modules with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let module = ModuleFactory::new(&db)
///     .nome("Database e SQL")
///     .codice("ITS-DBA")
///     .build()
///     .await?;
/// ```
pub struct ModuleFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    nome: String,
    codice: String,
    ore_totali: i32,
    descrizione: String,
    studenti_ids: Vec<String>,
}

impl<'a> ModuleFactory<'a> {
    /// Creates a new ModuleFactory with default values.
    ///
    /// Defaults:
    /// - id: fresh UUID
    /// - nome: `"Module {n}"`, codice: `"MOD-{n}"` where n is auto-incremented
    /// - ore_totali: 40, descrizione: empty, studenti_ids: empty
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let n = next_id();
        Self {
            db,
            id: new_record_id(),
            nome: format!("Module {}", n),
            codice: format!("MOD-{}", n),
            ore_totali: 40,
            descrizione: String::new(),
            studenti_ids: Vec::new(),
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn nome(mut self, nome: impl Into<String>) -> Self {
        self.nome = nome.into();
        self
    }

    pub fn codice(mut self, codice: impl Into<String>) -> Self {
        self.codice = codice.into();
        self
    }

    pub fn ore_totali(mut self, ore_totali: i32) -> Self {
        self.ore_totali = ore_totali;
        self
    }

    pub fn descrizione(mut self, descrizione: impl Into<String>) -> Self {
        self.descrizione = descrizione.into();
        self
    }

    pub fn studenti_ids(mut self, studenti_ids: Vec<String>) -> Self {
        self.studenti_ids = studenti_ids;
        self
    }

    /// Builds and inserts the module entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::module::Model)` - Created module entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::module::Model, DbErr> {
        entity::module::ActiveModel {
            id: ActiveValue::Set(self.id),
            nome: ActiveValue::Set(self.nome),
            codice: ActiveValue::Set(self.codice),
            ore_totali: ActiveValue::Set(self.ore_totali),
            descrizione: ActiveValue::Set(self.descrizione),
            studenti_ids: ActiveValue::Set(IdList(self.studenti_ids)),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a module with default values.
///
/// Shorthand for `ModuleFactory::new(db).build().await`.
pub async fn create_module(db: &DatabaseConnection) -> Result<entity::module::Model, DbErr> {
    ModuleFactory::new(db).build().await
}
