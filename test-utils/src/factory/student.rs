//! Student factory for creating test student entities.

use crate::factory::helpers::{new_record_id, next_id};
use entity::value::IdList;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test students with customizable fields.
pub struct StudentFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    nome: String,
    cognome: String,
    email: String,
    modules_ids: Vec<String>,
}

impl<'a> StudentFactory<'a> {
    /// Creates a new StudentFactory with default values.
    ///
    /// Defaults:
    /// - id: fresh UUID
    /// - nome: `"Mario"`, cognome: `"Rossi{n}"`, email: `"student{n}@its.edu"`
    /// - modules_ids: empty
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let n = next_id();
        Self {
            db,
            id: new_record_id(),
            nome: "Mario".to_string(),
            cognome: format!("Rossi{}", n),
            email: format!("student{}@its.edu", n),
            modules_ids: Vec::new(),
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

    pub fn cognome(mut self, cognome: impl Into<String>) -> Self {
        self.cognome = cognome.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn modules_ids(mut self, modules_ids: Vec<String>) -> Self {
        self.modules_ids = modules_ids;
        self
    }

    /// Builds and inserts the student entity into the database.
    pub async fn build(self) -> Result<entity::student::Model, DbErr> {
        entity::student::ActiveModel {
            id: ActiveValue::Set(self.id),
            nome: ActiveValue::Set(self.nome),
            cognome: ActiveValue::Set(self.cognome),
            email: ActiveValue::Set(self.email),
            modules_ids: ActiveValue::Set(IdList(self.modules_ids)),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a student with default values.
pub async fn create_student(db: &DatabaseConnection) -> Result<entity::student::Model, DbErr> {
    StudentFactory::new(db).build().await
}
