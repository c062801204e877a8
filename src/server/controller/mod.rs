//! HTTP request handlers.
//!
//! Controllers convert request DTOs into validated fields, call the matching service, and
//! convert the returned domain models back into DTOs. Every handler carries a
//! `#[utoipa::path]` annotation that feeds the generated OpenAPI document.

pub mod exam;
pub mod extract;
pub mod health;
pub mod module;
pub mod param;
pub mod student;
