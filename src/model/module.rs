use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ModuleDto {
    pub id: String,
    pub nome: String,
    pub codice: String,
    pub ore_totali: i32,
    pub descrizione: String,
    pub studenti_ids: Vec<String>,
}

/// Request body for creating or updating a module.
///
/// Unknown fields (including `studenti_ids`) are ignored: enrollments change only through
/// the assign endpoint and the student deletion cascade.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ModulePayloadDto {
    pub nome: String,
    pub codice: String,
    pub ore_totali: i64,
    #[serde(default)]
    pub descrizione: Option<String>,
}
