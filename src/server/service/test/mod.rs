use crate::server::{
    error::AppError,
    model::{exam::ExamFields, module::ModuleFields, student::StudentFields},
};
use test_utils::{builder::TestBuilder, factory};


fn module_fields(codice: &str) -> ModuleFields {
    ModuleFields {
        nome: "Basi di dati".to_string(),
        codice: codice.to_string(),
        ore_totali: 48,
        descrizione: "SQL e modellazione".to_string(),
    }
}

fn student_fields(email: &str) -> StudentFields {
    StudentFields {
        nome: "Luca".to_string(),
        cognome: "Ferrari".to_string(),
        email: email.to_string(),
    }
}

fn exam_fields(student_id: &str, module_id: &str, voto: i32) -> ExamFields {
    ExamFields {
        student_id: student_id.to_string(),
        module_id: module_id.to_string(),
        data: "2025-01-15".to_string(),
        voto,
        note: String::new(),
    }
}
