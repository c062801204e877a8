//! SeaORM entities for the course registry.
//!
//! Each entity is stored in its own table and behaves like a document collection: the
//! enrollment back-references and the exam's module snapshot are embedded JSON values rather
//! than join tables, so a record is read and written as one unit.

pub mod exam;
pub mod module;
pub mod prelude;
pub mod student;
pub mod value;
