use crate::server::model::identity::RecordId;
use crate::server::util::parse::parse_record_id;

mod exam;
mod module;
mod student;

/// Resolves an identity produced by a factory.
fn record_id(raw: &str) -> RecordId {
    parse_record_id(raw).unwrap()
}
