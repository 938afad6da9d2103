use async_trait::async_trait;

use crate::entry::EventEntry;
use crate::errors::DispatchError;

/// Acknowledgement returned for one submitted batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SinkAck {
    /// Entries the endpoint reported as rejected. The batch still counts as sent.
    pub failed_entries: usize,
}

/// Trait implemented by endpoints that accept batches of ingestion entries.
#[async_trait]
pub trait EventSink: Send + Sync {
    /// Returns the sink identifier (e.g. `eventbridge`).
    fn name(&self) -> &'static str;

    /// Submit one batch as a single call. The whole batch succeeds or fails.
    async fn put_events(&self, entries: Vec<EventEntry>) -> Result<SinkAck, DispatchError>;
}
