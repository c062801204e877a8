//! Student domain model and parameters.

use crate::{
    model::student::{StudentAverageDto, StudentDto, StudentPayloadDto},
    server::{error::AppError, util::validate},
};

/// A student with the modules they are enrolled in.
#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    pub id: String,
    pub nome: String,
    pub cognome: String,
    /// Unique across all students.
    pub email: String,
    /// Identities of enrolled modules, without duplicates.
    pub modules_ids: Vec<String>,
}

impl Student {
    pub fn from_entity(entity: entity::student::Model) -> Self {
        Self {
            id: entity.id,
            nome: entity.nome,
            cognome: entity.cognome,
            email: entity.email,
            modules_ids: entity.modules_ids.0,
        }
    }

    pub fn into_dto(self) -> StudentDto {
        StudentDto {
            id: self.id,
            nome: self.nome,
            cognome: self.cognome,
            email: self.email,
            modules_ids: self.modules_ids,
        }
    }
}

/// Validated personal fields of a student, used for both create and update.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentFields {
    pub nome: String,
    pub cognome: String,
    pub email: String,
}

impl StudentFields {
    pub fn from_dto(dto: StudentPayloadDto) -> Result<Self, AppError> {
        Ok(Self {
            nome: validate::text("nome", &dto.nome, 2, 100)?,
            cognome: validate::text("cognome", &dto.cognome, 2, 100)?,
            email: validate::email("email", &dto.email)?,
        })
    }
}

/// Grade average over a student's exams.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentAverage {
    /// Mean rounded to two decimals, `None` when there are no grades.
    pub average: Option<f64>,
    pub count: u64,
}

impl StudentAverage {
    /// Computes the rounded mean of `grades`.
    pub fn from_grades(grades: &[i32]) -> Self {
        if grades.is_empty() {
            return Self {
                average: None,
                count: 0,
            };
        }

        let sum: f64 = grades.iter().map(|&g| f64::from(g)).sum();
        let mean = sum / grades.len() as f64;

        Self {
            average: Some((mean * 100.0).round() / 100.0),
            count: grades.len() as u64,
        }
    }

    pub fn into_dto(self) -> StudentAverageDto {
        StudentAverageDto {
            average: self.average,
            count: self.count,
        }
    }
}
