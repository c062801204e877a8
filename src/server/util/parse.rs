use uuid::Uuid;

use crate::server::{error::AppError, model::identity::RecordId};

/// Resolves an identity string to its canonical record identity.
///
/// Accepts any textual UUID form (hyphenated, simple, braced, URN, any letter case) and
/// canonicalizes it to the lowercase hyphenated form used as the storage key and in
/// back-reference lists. No database access happens here, so a malformed identity never
/// reaches a query.
///
/// # Arguments
/// - `value` - The identity string supplied by the caller
///
/// # Returns
/// - `Ok(RecordId)` - Canonical identity
/// - `Err(AppError::InvalidIdentity)` - The string is not a well-formed identity
pub fn parse_record_id(value: &str) -> Result<RecordId, AppError> {
    Uuid::parse_str(value)
        .map(RecordId::from)
        .map_err(|_| AppError::InvalidIdentity(format!("Invalid identifier '{}'", value)))
}
