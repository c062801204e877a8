//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique names, codes and emails in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Generates a fresh record identity in the canonical hyphenated UUID form.
pub fn new_record_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Creates a module and a student that are enrolled in each other.
///
/// Both back-reference lists are written directly, so the pair is consistent from both sides.
///
/// # Returns
/// - `Ok((module, student))` - The enrolled pair
/// - `Err(DbErr)` - Database error during creation
pub async fn create_enrolled_pair(
    db: &DatabaseConnection,
) -> Result<(entity::module::Model, entity::student::Model), DbErr> {
    let student_id = new_record_id();
    let module = crate::factory::module::ModuleFactory::new(db)
        .studenti_ids(vec![student_id.clone()])
        .build()
        .await?;
    let student = crate::factory::student::StudentFactory::new(db)
        .id(student_id)
        .modules_ids(vec![module.id.clone()])
        .build()
        .await?;

    Ok((module, student))
}
