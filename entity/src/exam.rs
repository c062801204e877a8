use sea_orm::entity::prelude::*;

use crate::value::ModuloSnapshot;

/// Exam record.
///
/// `student_id` and `module_id` are plain identity strings without foreign keys: an exam
/// outlives the deletion of the student it references.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "exams")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub student_id: String,
    pub module_id: String,
    pub modulo_snapshot: ModuloSnapshot,
    /// Calendar date as `YYYY-MM-DD`, which also sorts chronologically.
    pub data: String,
    pub voto: i32,
    pub note: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
