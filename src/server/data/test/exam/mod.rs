use super::record_id;
use crate::server::{
    data::exam::ExamRepository,
    model::{
        exam::{ExamRecordParam, ModuleSnapshot},
        identity::RecordId,
    },
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_all;
mod get_grades_by_student;
mod update;

fn snapshot(codice: &str) -> ModuleSnapshot {
    ModuleSnapshot {
        nome: "Reti".to_string(),
        codice: codice.to_string(),
        ore_totali: 40,
        descrizione: String::new(),
    }
}

fn param(student_id: &str, module_id: &str, voto: i32) -> ExamRecordParam {
    ExamRecordParam {
        student_id: record_id(student_id),
        module_id: record_id(module_id),
        modulo_snapshot: snapshot("ITS-NET"),
        data: "2025-02-10".to_string(),
        voto,
        note: String::new(),
    }
}
