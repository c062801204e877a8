//! Service layer for business logic and orchestration.
//!
//! This module sits between the controller (API) layer and the data (repository) layer and
//! is where the relationships between the three stores are enforced:
//!
//! - **Identity resolution**: every identity string is resolved before any lookup
//! - **Referential checks**: referenced students and modules must exist at write time
//! - **Enrollment sync**: student and module back-references are written together
//!   (`enrollment`)
//! - **Snapshots**: an exam's module snapshot is rebuilt from the current module on every
//!   write (`snapshot`)
//! - **Uniqueness**: module codes and student emails are checked before writing, with the
//!   storage UNIQUE constraint as the final guard

pub mod enrollment;
pub mod exam;
pub mod module;
pub mod snapshot;
pub mod student;

#[cfg(test)]
mod test;
