//! Module domain model and parameters.

use crate::{
    model::module::{ModuleDto, ModulePayloadDto},
    server::{error::AppError, util::validate},
};

/// A teaching module with its enrolled students.
#[derive(Debug, Clone, PartialEq)]
pub struct Module {
    pub id: String,
    pub nome: String,
    /// Unique across all modules.
    pub codice: String,
    pub ore_totali: i32,
    pub descrizione: String,
    /// Identities of enrolled students, without duplicates.
    pub studenti_ids: Vec<String>,
}

impl Module {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::module::Model) -> Self {
        Self {
            id: entity.id,
            nome: entity.nome,
            codice: entity.codice,
            ore_totali: entity.ore_totali,
            descrizione: entity.descrizione,
            studenti_ids: entity.studenti_ids.0,
        }
    }

    pub fn into_dto(self) -> ModuleDto {
        ModuleDto {
            id: self.id,
            nome: self.nome,
            codice: self.codice,
            ore_totali: self.ore_totali,
            descrizione: self.descrizione,
            studenti_ids: self.studenti_ids,
        }
    }
}

/// Validated descriptive fields of a module, used for both create and update.
///
/// Enrollment lists are deliberately absent: they are maintained by the enrollment
/// synchronizer only.
#[derive(Debug, Clone, PartialEq)]
pub struct ModuleFields {
    pub nome: String,
    pub codice: String,
    pub ore_totali: i32,
    pub descrizione: String,
}

impl ModuleFields {
    /// Trims and validates a request payload.
    ///
    /// # Returns
    /// - `Ok(ModuleFields)` - All constraints hold
    /// - `Err(AppError::Validation)` - First violated constraint
    pub fn from_dto(dto: ModulePayloadDto) -> Result<Self, AppError> {
        Ok(Self {
            nome: validate::text("nome", &dto.nome, 2, 100)?,
            codice: validate::text("codice", &dto.codice, 2, 20)?,
            ore_totali: validate::int_range("ore_totali", dto.ore_totali, 1, 1000)?,
            descrizione: validate::text(
                "descrizione",
                dto.descrizione.as_deref().unwrap_or_default(),
                0,
                1000,
            )?,
        })
    }
}
