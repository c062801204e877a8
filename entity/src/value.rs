//! JSON column value types embedded in entity records.

use sea_orm::FromJsonQueryResult;
use serde::{Deserialize, Serialize};

/// Ordered list of record identities stored as a JSON array.
///
/// Used for the denormalized enrollment back-references on modules (`studenti_ids`) and
/// students (`modules_ids`). Set semantics are applied by the callers that mutate it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
#[serde(transparent)]
pub struct IdList(pub Vec<String>);

impl IdList {
    /// Inserts `id` unless already present. Returns whether the list changed.
    pub fn insert(&mut self, id: &str) -> bool {
        if self.contains(id) {
            return false;
        }
        self.0.push(id.to_string());
        true
    }

    /// Removes every occurrence of `id`. Returns whether the list changed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.0.len();
        self.0.retain(|existing| existing != id);
        self.0.len() != before
    }

    pub fn contains(&self, id: &str) -> bool {
        self.0.iter().any(|existing| existing == id)
    }
}

/// Point-in-time copy of a module's descriptive fields, embedded in each exam record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct ModuloSnapshot {
    pub nome: String,
    pub codice: String,
    pub ore_totali: i32,
    #[serde(default)]
    pub descrizione: String,
}
