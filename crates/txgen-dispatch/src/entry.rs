use serde::Serialize;
use tracing::error;

/// Source label attached to every ingestion entry.
pub const SOURCE: &str = "Transactions";
/// Detail-type label attached to every ingestion entry.
pub const DETAIL_TYPE: &str = "transaction";

/// Wire-level wrapper around one serialized record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventEntry {
    pub source: &'static str,
    pub detail_type: &'static str,
    pub detail: String,
}

impl EventEntry {
    pub fn new(detail: String) -> Self {
        Self {
            source: SOURCE,
            detail_type: DETAIL_TYPE,
            detail,
        }
    }
}

/// Wrap every record of a batch as an ingestion entry.
///
/// A record that fails to serialize is logged and still submitted with an
/// empty detail; it does not stop the batch.
pub fn build_entries<T: Serialize>(batch: &[T]) -> Vec<EventEntry> {
    batch
        .iter()
        .enumerate()
        .map(|(position, record)| match serde_json::to_string(record) {
            Ok(detail) => EventEntry::new(detail),
            Err(err) => {
                error!(event = "entry_serialization_failed", position, error = %err, "error marshalling");
                EventEntry::new(String::new())
            }
        })
        .collect()
}
