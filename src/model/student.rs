use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::exam::ExamDto;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct StudentDto {
    pub id: String,
    pub nome: String,
    pub cognome: String,
    pub email: String,
    pub modules_ids: Vec<String>,
}

/// Request body for creating or updating a student. `modules_ids` is ignored if sent.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct StudentPayloadDto {
    pub nome: String,
    pub cognome: String,
    pub email: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct StudentAverageDto {
    /// Mean grade rounded to two decimals, `null` when the student has no graded exams.
    pub average: Option<f64>,
    pub count: u64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct StudentExamsDto {
    pub min_score: i32,
    pub items: Vec<ExamDto>,
}
