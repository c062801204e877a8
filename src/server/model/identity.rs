use std::fmt;

use uuid::Uuid;

/// Canonical identity of a stored record.
///
/// Always the lowercase hyphenated UUID form. Obtained either by generating a fresh
/// identity for an insert or through `util::parse::parse_record_id`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecordId(String);

impl RecordId {
    /// Generates a fresh random identity for a new record.
    pub fn generate() -> Self {
        Self::from(Uuid::new_v4())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<Uuid> for RecordId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid.hyphenated().to_string())
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
