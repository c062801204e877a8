//! Exam domain model, module snapshot and parameters.

use crate::{
    model::{
        exam::{ExamDto, ExamPayloadDto, ModuleSnapshotDto},
        student::StudentExamsDto,
    },
    server::{
        error::AppError,
        model::{identity::RecordId, module::Module},
        util::{date::normalize_exam_date, validate},
    },
};

/// Point-in-time copy of a module's descriptive fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleSnapshot {
    pub nome: String,
    pub codice: String,
    pub ore_totali: i32,
    pub descrizione: String,
}

impl ModuleSnapshot {
    /// Copies the four descriptive fields of `module`.
    pub fn of(module: &Module) -> Self {
        Self {
            nome: module.nome.clone(),
            codice: module.codice.clone(),
            ore_totali: module.ore_totali,
            descrizione: module.descrizione.clone(),
        }
    }

    pub fn from_entity(entity: entity::value::ModuloSnapshot) -> Self {
        Self {
            nome: entity.nome,
            codice: entity.codice,
            ore_totali: entity.ore_totali,
            descrizione: entity.descrizione,
        }
    }

    pub fn into_entity(self) -> entity::value::ModuloSnapshot {
        entity::value::ModuloSnapshot {
            nome: self.nome,
            codice: self.codice,
            ore_totali: self.ore_totali,
            descrizione: self.descrizione,
        }
    }

    pub fn into_dto(self) -> ModuleSnapshotDto {
        ModuleSnapshotDto {
            nome: self.nome,
            codice: self.codice,
            ore_totali: self.ore_totali,
            descrizione: self.descrizione,
        }
    }
}

/// A graded exam of one student in one module.
#[derive(Debug, Clone, PartialEq)]
pub struct Exam {
    pub id: String,
    pub student_id: String,
    pub module_id: String,
    pub modulo_snapshot: ModuleSnapshot,
    /// `YYYY-MM-DD`
    pub data: String,
    pub voto: i32,
    pub note: String,
}

impl Exam {
    pub fn from_entity(entity: entity::exam::Model) -> Self {
        Self {
            id: entity.id,
            student_id: entity.student_id,
            module_id: entity.module_id,
            modulo_snapshot: ModuleSnapshot::from_entity(entity.modulo_snapshot),
            data: entity.data,
            voto: entity.voto,
            note: entity.note,
        }
    }

    pub fn into_dto(self) -> ExamDto {
        ExamDto {
            id: self.id,
            student_id: self.student_id,
            module_id: self.module_id,
            modulo_snapshot: self.modulo_snapshot.into_dto(),
            data: self.data,
            voto: self.voto,
            note: self.note,
        }
    }
}

/// Validated exam input used for both create and update.
///
/// The student and module identities are kept as supplied; the service resolves them so
/// that a malformed identity is reported as `InvalidIdentity` rather than a validation
/// failure. Any snapshot in the payload is dropped here.
#[derive(Debug, Clone, PartialEq)]
pub struct ExamFields {
    pub student_id: String,
    pub module_id: String,
    /// Normalized `YYYY-MM-DD`.
    pub data: String,
    pub voto: i32,
    pub note: String,
}

impl ExamFields {
    pub fn from_dto(dto: ExamPayloadDto) -> Result<Self, AppError> {
        Ok(Self {
            student_id: dto.student_id.trim().to_string(),
            module_id: dto.module_id.trim().to_string(),
            data: normalize_exam_date(&dto.data)?,
            voto: validate::int_range("voto", dto.voto, 0, 30)?,
            note: validate::text("note", dto.note.as_deref().unwrap_or_default(), 0, 1000)?,
        })
    }
}

/// Fully resolved exam record written by the repository on create and update.
///
/// Built by the service after both identities were resolved and the snapshot was taken
/// from the current module.
#[derive(Debug, Clone, PartialEq)]
pub struct ExamRecordParam {
    pub student_id: RecordId,
    pub module_id: RecordId,
    pub modulo_snapshot: ModuleSnapshot,
    pub data: String,
    pub voto: i32,
    pub note: String,
}

/// Exams of a student graded at or above a threshold, most recent first.
#[derive(Debug, Clone, PartialEq)]
pub struct ExamsAboveThreshold {
    pub min_score: i32,
    pub items: Vec<Exam>,
}

impl ExamsAboveThreshold {
    pub fn into_dto(self) -> StudentExamsDto {
        StudentExamsDto {
            min_score: self.min_score,
            items: self.items.into_iter().map(Exam::into_dto).collect(),
        }
    }
}
