use sea_orm::DatabaseConnection;

use crate::server::{
    data::module::ModuleRepository,
    error::AppError,
    model::{exam::ModuleSnapshot, identity::RecordId},
};

/// Builds the snapshot of a module as it currently exists.
///
/// Called on every exam create and update; whatever snapshot the caller sent has already
/// been discarded, so the stored copy always comes from verified module state.
///
/// # Arguments
/// - `db` - Database connection
/// - `module_id` - Resolved identity of the referenced module
///
/// # Returns
/// - `Ok(ModuleSnapshot)` - Copy of `nome`, `codice`, `ore_totali`, `descrizione`
/// - `Err(AppError::InvalidReference)` - The module does not exist
/// - `Err(AppError::DbErr)` - Database error during lookup
pub async fn build_snapshot(
    db: &DatabaseConnection,
    module_id: &RecordId,
) -> Result<ModuleSnapshot, AppError> {
    let module = ModuleRepository::new(db)
        .get_by_id(module_id)
        .await?
        .ok_or_else(|| AppError::InvalidReference("Module does not exist".to_string()))?;

    Ok(ModuleSnapshot::of(&module))
}
