use sea_orm::DatabaseConnection;

use crate::server::{
    data::{exam::ExamRepository, student::StudentRepository},
    error::AppError,
    model::{
        exam::{Exam, ExamFields, ExamRecordParam},
        identity::RecordId,
    },
    service::snapshot::build_snapshot,
    util::parse::parse_record_id,
};

pub struct ExamService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ExamService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists all exams, most recent date first
    pub async fn list(&self) -> Result<Vec<Exam>, AppError> {
        Ok(ExamRepository::new(self.db).get_all().await?)
    }

    pub async fn get(&self, id: &str) -> Result<Exam, AppError> {
        let id = parse_record_id(id)?;

        ExamRepository::new(self.db)
            .get_by_id(&id)
            .await?
            .ok_or_else(exam_not_found)
    }

    /// Records an exam
    ///
    /// Checks that the student exists and snapshots the module as it is now.
    ///
    /// # Returns
    /// - `Ok(Exam)` - The created exam with its snapshot
    /// - `Err(AppError::InvalidIdentity)` - A referenced identity is malformed
    /// - `Err(AppError::InvalidReference)` - The student or the module does not exist
    pub async fn create(&self, fields: ExamFields) -> Result<Exam, AppError> {
        let student_id = parse_record_id(&fields.student_id)?;
        let module_id = parse_record_id(&fields.module_id)?;

        if !StudentRepository::new(self.db).exists(&student_id).await? {
            return Err(AppError::InvalidReference(
                "Student does not exist".to_string(),
            ));
        }

        let modulo_snapshot = build_snapshot(self.db, &module_id).await?;

        let id = RecordId::generate();
        let exam = ExamRepository::new(self.db)
            .create(
                &id,
                ExamRecordParam {
                    student_id,
                    module_id,
                    modulo_snapshot,
                    data: fields.data,
                    voto: fields.voto,
                    note: fields.note,
                },
            )
            .await?;

        tracing::info!(
            exam_id = %exam.id,
            student_id = %exam.student_id,
            module_id = %exam.module_id,
            "Created exam"
        );

        Ok(exam)
    }

    /// Replaces an exam's fields
    ///
    /// The snapshot is rebuilt from the module as it is now, so an update replaces the
    /// snapshot taken at creation if the module has changed since.
    ///
    /// # Returns
    /// - `Ok(Exam)` - The updated exam
    /// - `Err(AppError::InvalidIdentity)` - An identity is malformed
    /// - `Err(AppError::NotFound)` - The exam does not exist
    /// - `Err(AppError::InvalidReference)` - The module does not exist
    pub async fn update(&self, id: &str, fields: ExamFields) -> Result<Exam, AppError> {
        let id = parse_record_id(id)?;
        let repo = ExamRepository::new(self.db);

        if !repo.exists(&id).await? {
            return Err(exam_not_found());
        }

        let student_id = parse_record_id(&fields.student_id)?;
        let module_id = parse_record_id(&fields.module_id)?;
        let modulo_snapshot = build_snapshot(self.db, &module_id).await?;

        let exam = repo
            .update(
                &id,
                ExamRecordParam {
                    student_id,
                    module_id,
                    modulo_snapshot,
                    data: fields.data,
                    voto: fields.voto,
                    note: fields.note,
                },
            )
            .await?
            .ok_or_else(exam_not_found)?;

        tracing::info!(exam_id = %exam.id, "Updated exam");

        Ok(exam)
    }

    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        let id = parse_record_id(id)?;

        if ExamRepository::new(self.db).delete(&id).await? == 0 {
            return Err(exam_not_found());
        }

        tracing::info!(exam_id = %id, "Deleted exam");

        Ok(())
    }
}

fn exam_not_found() -> AppError {
    AppError::NotFound("Exam not found".to_string())
}
