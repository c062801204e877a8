use sea_orm::DatabaseConnection;

use crate::server::{
    data::{exam::ExamRepository, student::StudentRepository},
    error::AppError,
    model::{
        exam::ExamsAboveThreshold,
        identity::RecordId,
        student::{Student, StudentAverage, StudentFields},
    },
    service::enrollment::EnrollmentSynchronizer,
    util::parse::parse_record_id,
};

/// Default threshold for `exams_above`.
pub const DEFAULT_MIN_SCORE: i32 = 24;

const DUPLICATE_EMAIL: &str = "Email already registered";

pub struct StudentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StudentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists all students ordered by surname
    pub async fn list(&self) -> Result<Vec<Student>, AppError> {
        Ok(StudentRepository::new(self.db).get_all().await?)
    }

    pub async fn get(&self, id: &str) -> Result<Student, AppError> {
        let id = parse_record_id(id)?;

        StudentRepository::new(self.db)
            .get_by_id(&id)
            .await?
            .ok_or_else(student_not_found)
    }

    /// Creates a student after checking the email is not already registered
    pub async fn create(&self, fields: StudentFields) -> Result<Student, AppError> {
        let repo = StudentRepository::new(self.db);

        if repo.email_taken(&fields.email, None).await? {
            return Err(AppError::DuplicateValue(DUPLICATE_EMAIL.to_string()));
        }

        let id = RecordId::generate();
        let student = repo
            .create(&id, fields)
            .await
            .map_err(|err| AppError::from_unique_violation(err, DUPLICATE_EMAIL))?;

        tracing::info!(student_id = %student.id, "Created student");

        Ok(student)
    }

    /// Updates a student's personal fields
    pub async fn update(&self, id: &str, fields: StudentFields) -> Result<Student, AppError> {
        let id = parse_record_id(id)?;
        let repo = StudentRepository::new(self.db);

        if repo.email_taken(&fields.email, Some(&id)).await? {
            return Err(AppError::DuplicateValue("Email already in use".to_string()));
        }

        let student = repo
            .update(&id, fields)
            .await
            .map_err(|err| AppError::from_unique_violation(err, DUPLICATE_EMAIL))?
            .ok_or_else(student_not_found)?;

        tracing::info!(student_id = %student.id, "Updated student");

        Ok(student)
    }

    /// Deletes a student and removes it from every module's enrollment list
    ///
    /// Exams referencing the student are kept as they are.
    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        let id = parse_record_id(id)?;

        if StudentRepository::new(self.db).delete(&id).await? == 0 {
            return Err(student_not_found());
        }

        let modules = EnrollmentSynchronizer::new(self.db)
            .detach_student(&id)
            .await?;

        tracing::info!(student_id = %id, modules, "Deleted student");

        Ok(())
    }

    /// Enrolls the student in the module on both sides
    pub async fn assign_module(&self, student_id: &str, module_id: &str) -> Result<(), AppError> {
        EnrollmentSynchronizer::new(self.db)
            .assign(student_id, module_id)
            .await
    }

    /// Computes the student's grade average over all their exams
    ///
    /// The student record itself is not required to exist, so exams left behind by a
    /// deleted student still count.
    pub async fn average(&self, student_id: &str) -> Result<StudentAverage, AppError> {
        let student_id = parse_record_id(student_id)?;

        let grades = ExamRepository::new(self.db)
            .get_grades_by_student(&student_id)
            .await?;

        Ok(StudentAverage::from_grades(&grades))
    }

    /// Gets the student's exams graded at least `min_score`, most recent first
    pub async fn exams_above(
        &self,
        student_id: &str,
        min_score: i32,
    ) -> Result<ExamsAboveThreshold, AppError> {
        let student_id = parse_record_id(student_id)?;

        let items = ExamRepository::new(self.db)
            .get_by_student_min_score(&student_id, min_score)
            .await?;

        Ok(ExamsAboveThreshold { min_score, items })
    }
}

fn student_not_found() -> AppError {
    AppError::NotFound("Student not found".to_string())
}
