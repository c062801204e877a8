use sea_orm::{DatabaseConnection, DbErr};

use crate::server::{
    data::{module::ModuleRepository, student::StudentRepository},
    error::AppError,
    model::identity::RecordId,
    util::parse::parse_record_id,
};

/// Keeps the student ↔ module enrollment back-references in sync.
///
/// All writes to `modules_ids` and `studenti_ids` go through this type. The two sides are
/// separate records updated one after the other without a transaction: if the second
/// update fails the first is not rolled back, and the pair stays one-sided until the
/// assignment is retried. Because both sides use set insertion, retrying is safe.
pub struct EnrollmentSynchronizer<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EnrollmentSynchronizer<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Enrolls a student in a module, updating both sides.
    ///
    /// Idempotent: assigning the same pair again leaves each list with one entry.
    ///
    /// # Arguments
    /// - `student_id` - Identity string of the student
    /// - `module_id` - Identity string of the module
    ///
    /// # Returns
    /// - `Ok(())` - Both lists contain the pair
    /// - `Err(AppError::InvalidIdentity)` - Either identity is malformed
    /// - `Err(AppError::NotFound)` - "Student not found" or "Module not found"
    /// - `Err(AppError::DbErr)` - Database error; the student side may already be written
    pub async fn assign(&self, student_id: &str, module_id: &str) -> Result<(), AppError> {
        let student_id = parse_record_id(student_id)?;
        let module_id = parse_record_id(module_id)?;

        let student_repo = StudentRepository::new(self.db);
        let module_repo = ModuleRepository::new(self.db);

        if !student_repo.exists(&student_id).await? {
            return Err(student_not_found());
        }
        if !module_repo.exists(&module_id).await? {
            return Err(module_not_found());
        }

        let student_changed = student_repo
            .add_module(&student_id, &module_id)
            .await
            .map_err(|err| record_not_found_as(err, student_not_found))?;

        let module_changed = match module_repo.add_student(&module_id, &student_id).await {
            Ok(changed) => changed,
            Err(err) => {
                tracing::warn!(
                    student_id = %student_id,
                    module_id = %module_id,
                    "Enrollment left one-sided: student updated but module update failed: {}",
                    err
                );
                return Err(record_not_found_as(err, module_not_found));
            }
        };

        tracing::info!(
            student_id = %student_id,
            module_id = %module_id,
            student_changed,
            module_changed,
            "Assigned module to student"
        );

        Ok(())
    }

    /// Removes a deleted student from every module's enrollment list.
    ///
    /// Best effort across all modules: modules that never listed the student are skipped
    /// and no existence check is made for the student itself.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of modules that listed the student
    /// - `Err(AppError::DbErr)` - Database error; modules processed so far stay updated
    pub async fn detach_student(&self, student_id: &RecordId) -> Result<u64, AppError> {
        let changed = ModuleRepository::new(self.db)
            .remove_student_from_all(student_id)
            .await?;

        tracing::debug!(student_id = %student_id, modules = changed, "Detached student from modules");

        Ok(changed)
    }
}

fn student_not_found() -> AppError {
    AppError::NotFound("Student not found".to_string())
}

fn module_not_found() -> AppError {
    AppError::NotFound("Module not found".to_string())
}

/// The record can vanish between the existence check and the write; report that the same
/// way as a failed existence check.
fn record_not_found_as(err: DbErr, not_found: fn() -> AppError) -> AppError {
    match err {
        DbErr::RecordNotFound(_) => not_found(),
        err => AppError::DbErr(err),
    }
}
