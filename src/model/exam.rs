use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ModuleSnapshotDto {
    pub nome: String,
    pub codice: String,
    pub ore_totali: i32,
    #[serde(default)]
    pub descrizione: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ExamDto {
    pub id: String,
    pub student_id: String,
    pub module_id: String,
    pub modulo_snapshot: ModuleSnapshotDto,
    /// Exam date as `YYYY-MM-DD`.
    pub data: String,
    pub voto: i32,
    pub note: String,
}

/// Request body for creating or updating an exam.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ExamPayloadDto {
    pub student_id: String,
    pub module_id: String,
    /// Accepted for compatibility but never stored: the server always rebuilds the
    /// snapshot from the current module.
    #[serde(default)]
    pub modulo_snapshot: Option<ModuleSnapshotDto>,
    /// Calendar date, or a date-time whose time-of-day is dropped.
    pub data: String,
    pub voto: i64,
    #[serde(default)]
    pub note: Option<String>,
}
