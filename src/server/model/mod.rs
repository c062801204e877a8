//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. Parameter types (`*Fields`) carry
//! trimmed, validated input from the controllers to the services.

pub mod exam;
pub mod identity;
pub mod module;
pub mod student;
