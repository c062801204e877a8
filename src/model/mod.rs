//! Data transfer objects exchanged over the HTTP API.

pub mod api;
pub mod exam;
pub mod module;
pub mod student;
