//! Exam factory for creating test exam entities.
//!
//! The snapshot is copied from the module passed to the factory at build time, matching
//! what the service layer would have recorded.

use crate::factory::helpers::new_record_id;
use entity::value::ModuloSnapshot;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test exams with customizable fields.
pub struct ExamFactory<'a> {
    db: &'a DatabaseConnection,
    student_id: String,
    module_id: String,
    snapshot: ModuloSnapshot,
    data: String,
    voto: i32,
    note: String,
}

impl<'a> ExamFactory<'a> {
    /// Creates a new ExamFactory for the given student and module.
    ///
    /// Defaults:
    /// - data: `"2025-01-15"`, voto: 24, note: empty
    pub fn new(
        db: &'a DatabaseConnection,
        student_id: impl Into<String>,
        module: &entity::module::Model,
    ) -> Self {
        Self {
            db,
            student_id: student_id.into(),
            module_id: module.id.clone(),
            snapshot: ModuloSnapshot {
                nome: module.nome.clone(),
                codice: module.codice.clone(),
                ore_totali: module.ore_totali,
                descrizione: module.descrizione.clone(),
            },
            data: "2025-01-15".to_string(),
            voto: 24,
            note: String::new(),
        }
    }

    pub fn data(mut self, data: impl Into<String>) -> Self {
        self.data = data.into();
        self
    }

    pub fn voto(mut self, voto: i32) -> Self {
        self.voto = voto;
        self
    }

    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into();
        self
    }

    /// Builds and inserts the exam entity into the database.
    pub async fn build(self) -> Result<entity::exam::Model, DbErr> {
        entity::exam::ActiveModel {
            id: ActiveValue::Set(new_record_id()),
            student_id: ActiveValue::Set(self.student_id),
            module_id: ActiveValue::Set(self.module_id),
            modulo_snapshot: ActiveValue::Set(self.snapshot),
            data: ActiveValue::Set(self.data),
            voto: ActiveValue::Set(self.voto),
            note: ActiveValue::Set(self.note),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an exam with default values for the given student and module.
pub async fn create_exam(
    db: &DatabaseConnection,
    student_id: impl Into<String>,
    module: &entity::module::Model,
) -> Result<entity::exam::Model, DbErr> {
    ExamFactory::new(db, student_id, module).build().await
}
