pub use super::exam::Entity as Exam;
pub use super::module::Entity as Module;
pub use super::student::Entity as Student;
