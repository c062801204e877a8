//! Factory methods for creating test data.
//!
//! Factories insert records directly through the entity layer with sensible defaults,
//! bypassing the service layer. This lets tests set up states the services would refuse to
//! produce, such as an exam whose student has since been deleted.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let module = factory::create_module(&db).await?;
//! let student = factory::create_student(&db).await?;
//! let exam = factory::create_exam(&db, &student.id, &module).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let module = factory::module::ModuleFactory::new(&db)
//!     .codice("ITS-PYT")
//!     .ore_totali(80)
//!     .build()
//!     .await?;
//! ```

pub mod exam;
pub mod helpers;
pub mod module;
pub mod student;

pub use exam::create_exam;
pub use module::create_module;
pub use student::create_student;
