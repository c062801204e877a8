//! Database repository layer for the three record stores.
//!
//! Each repository handles the CRUD operations of one store. Repositories use SeaORM entity
//! models internally and return domain models, so entity types never leak into the service
//! layer. They know nothing about the relationships between stores: keeping the enrollment
//! back-references and exam snapshots consistent is the job of the service layer.

pub mod exam;
pub mod module;
pub mod student;

#[cfg(test)]
mod test;
