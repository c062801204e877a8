use super::record_id;
use crate::server::{
    data::module::ModuleRepository,
    model::{identity::RecordId, module::ModuleFields},
};
use sea_orm::{DbErr, EntityTrait, SqlErr};
use test_utils::{builder::TestBuilder, factory};

mod add_student;
mod codice_taken;
mod create;
mod delete;
mod get_all;
mod remove_student_from_all;
mod update;

fn fields(codice: &str) -> ModuleFields {
    ModuleFields {
        nome: "Programmazione Python".to_string(),
        codice: codice.to_string(),
        ore_totali: 60,
        descrizione: "Fondamenti del linguaggio".to_string(),
    }
}
