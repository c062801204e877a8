use super::record_id;
use crate::server::{
    data::student::StudentRepository,
    model::{identity::RecordId, student::StudentFields},
};
use sea_orm::{DbErr, SqlErr};
use test_utils::{builder::TestBuilder, factory};

mod add_module;
mod create;
mod delete;
mod email_taken;
mod get_all;
mod update;

fn fields(email: &str) -> StudentFields {
    StudentFields {
        nome: "Giulia".to_string(),
        cognome: "Bianchi".to_string(),
        email: email.to_string(),
    }
}
