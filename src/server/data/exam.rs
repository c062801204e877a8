use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::{
    exam::{Exam, ExamRecordParam},
    identity::RecordId,
};

/// Repository providing database operations for exams.
///
/// Snapshots are written exactly as passed in; deriving them from the module is the
/// service's responsibility.
pub struct ExamRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ExamRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new exam record.
    pub async fn create(&self, id: &RecordId, param: ExamRecordParam) -> Result<Exam, DbErr> {
        let entity = entity::exam::ActiveModel {
            id: ActiveValue::Set(id.to_string()),
            student_id: ActiveValue::Set(param.student_id.into_string()),
            module_id: ActiveValue::Set(param.module_id.into_string()),
            modulo_snapshot: ActiveValue::Set(param.modulo_snapshot.into_entity()),
            data: ActiveValue::Set(param.data),
            voto: ActiveValue::Set(param.voto),
            note: ActiveValue::Set(param.note),
        }
        .insert(self.db)
        .await?;

        Ok(Exam::from_entity(entity))
    }

    pub async fn get_by_id(&self, id: &RecordId) -> Result<Option<Exam>, DbErr> {
        let entity = entity::prelude::Exam::find_by_id(id.as_str())
            .one(self.db)
            .await?;

        Ok(entity.map(Exam::from_entity))
    }

    /// Gets all exams, most recent date first.
    pub async fn get_all(&self) -> Result<Vec<Exam>, DbErr> {
        let entities = entity::prelude::Exam::find()
            .order_by_desc(entity::exam::Column::Data)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Exam::from_entity).collect())
    }

    /// Replaces every field of an exam, snapshot included.
    ///
    /// # Returns
    /// - `Ok(Some(Exam))` - The updated exam
    /// - `Ok(None)` - No exam exists with the specified ID
    pub async fn update(&self, id: &RecordId, param: ExamRecordParam) -> Result<Option<Exam>, DbErr> {
        let Some(exam) = entity::prelude::Exam::find_by_id(id.as_str())
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::exam::ActiveModel = exam.into();
        active_model.student_id = ActiveValue::Set(param.student_id.into_string());
        active_model.module_id = ActiveValue::Set(param.module_id.into_string());
        active_model.modulo_snapshot = ActiveValue::Set(param.modulo_snapshot.into_entity());
        active_model.data = ActiveValue::Set(param.data);
        active_model.voto = ActiveValue::Set(param.voto);
        active_model.note = ActiveValue::Set(param.note);

        let entity = active_model.update(self.db).await?;

        Ok(Some(Exam::from_entity(entity)))
    }

    /// Deletes an exam.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of deleted rows (0 when the exam didn't exist)
    pub async fn delete(&self, id: &RecordId) -> Result<u64, DbErr> {
        let result = entity::prelude::Exam::delete_by_id(id.as_str())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn exists(&self, id: &RecordId) -> Result<bool, DbErr> {
        let count = entity::prelude::Exam::find_by_id(id.as_str())
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets the grades of every exam referencing the student.
    pub async fn get_grades_by_student(&self, student_id: &RecordId) -> Result<Vec<i32>, DbErr> {
        entity::prelude::Exam::find()
            .select_only()
            .column(entity::exam::Column::Voto)
            .filter(entity::exam::Column::StudentId.eq(student_id.as_str()))
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }

    /// Gets the student's exams graded at least `min_score`, most recent date first.
    pub async fn get_by_student_min_score(
        &self,
        student_id: &RecordId,
        min_score: i32,
    ) -> Result<Vec<Exam>, DbErr> {
        let entities = entity::prelude::Exam::find()
            .filter(entity::exam::Column::StudentId.eq(student_id.as_str()))
            .filter(entity::exam::Column::Voto.gte(min_score))
            .order_by_desc(entity::exam::Column::Data)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Exam::from_entity).collect())
    }
}
