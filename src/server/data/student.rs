use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
};

use crate::server::model::{
    identity::RecordId,
    student::{Student, StudentFields},
};

/// Repository providing database operations for students.
pub struct StudentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StudentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new student with an empty module list.
    ///
    /// # Returns
    /// - `Ok(Student)` - The created student
    /// - `Err(DbErr)` - Database error, including a UNIQUE violation on `email`
    pub async fn create(&self, id: &RecordId, fields: StudentFields) -> Result<Student, DbErr> {
        let entity = entity::student::ActiveModel {
            id: ActiveValue::Set(id.to_string()),
            nome: ActiveValue::Set(fields.nome),
            cognome: ActiveValue::Set(fields.cognome),
            email: ActiveValue::Set(fields.email),
            modules_ids: ActiveValue::Set(Default::default()),
        }
        .insert(self.db)
        .await?;

        Ok(Student::from_entity(entity))
    }

    pub async fn get_by_id(&self, id: &RecordId) -> Result<Option<Student>, DbErr> {
        let entity = entity::prelude::Student::find_by_id(id.as_str())
            .one(self.db)
            .await?;

        Ok(entity.map(Student::from_entity))
    }

    /// Gets all students ordered by surname ascending.
    pub async fn get_all(&self) -> Result<Vec<Student>, DbErr> {
        let entities = entity::prelude::Student::find()
            .order_by_asc(entity::student::Column::Cognome)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Student::from_entity).collect())
    }

    /// Updates a student's personal fields, leaving the module list untouched.
    ///
    /// # Returns
    /// - `Ok(Some(Student))` - The updated student
    /// - `Ok(None)` - No student exists with the specified ID
    /// - `Err(DbErr)` - Database error, including a UNIQUE violation on `email`
    pub async fn update(
        &self,
        id: &RecordId,
        fields: StudentFields,
    ) -> Result<Option<Student>, DbErr> {
        let Some(student) = entity::prelude::Student::find_by_id(id.as_str())
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::student::ActiveModel = student.into();
        active_model.nome = ActiveValue::Set(fields.nome);
        active_model.cognome = ActiveValue::Set(fields.cognome);
        active_model.email = ActiveValue::Set(fields.email);

        let entity = active_model.update(self.db).await?;

        Ok(Some(Student::from_entity(entity)))
    }

    /// Deletes a student.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of deleted rows (0 when the student didn't exist)
    pub async fn delete(&self, id: &RecordId) -> Result<u64, DbErr> {
        let result = entity::prelude::Student::delete_by_id(id.as_str())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn exists(&self, id: &RecordId) -> Result<bool, DbErr> {
        let count = entity::prelude::Student::find_by_id(id.as_str())
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Checks whether another student already uses `email`.
    ///
    /// # Arguments
    /// - `email` - Address to look for
    /// - `exclude` - Student to ignore, so an update keeping its own address is not a conflict
    pub async fn email_taken(&self, email: &str, exclude: Option<&RecordId>) -> Result<bool, DbErr> {
        let mut query =
            entity::prelude::Student::find().filter(entity::student::Column::Email.eq(email));

        if let Some(exclude) = exclude {
            query = query.filter(entity::student::Column::Id.ne(exclude.as_str()));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Adds a module to the student's module list unless already present.
    ///
    /// Read and write share one transaction holding the student row.
    ///
    /// # Returns
    /// - `Ok(true)` - The module was added
    /// - `Ok(false)` - The module was already listed, nothing written
    /// - `Err(DbErr::RecordNotFound)` - No student exists with the specified ID
    pub async fn add_module(
        &self,
        student_id: &RecordId,
        module_id: &RecordId,
    ) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        let student = entity::prelude::Student::find_by_id(student_id.as_str())
            .lock_exclusive()
            .one(&txn)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Student with id {} not found",
                student_id
            )))?;

        let mut modules_ids = student.modules_ids.clone();
        if !modules_ids.insert(module_id.as_str()) {
            txn.commit().await?;
            return Ok(false);
        }

        let mut active_model: entity::student::ActiveModel = student.into();
        active_model.modules_ids = ActiveValue::Set(modules_ids);
        active_model.update(&txn).await?;

        txn.commit().await?;

        Ok(true)
    }
}
