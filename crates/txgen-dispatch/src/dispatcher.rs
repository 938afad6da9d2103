use std::io::Write;
use std::time::Instant;

use tracing::{info, warn};

use txgen_core::Transaction;

use crate::entry::build_entries;
use crate::errors::DispatchError;
use crate::sink::EventSink;

/// Most entries EventBridge accepts in one `PutEvents` call.
pub const MAX_BATCH_SIZE: usize = 10;

/// Options for a send run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchOptions {
    /// Records per submission, between 1 and [`MAX_BATCH_SIZE`].
    pub batch_size: usize,
}

impl Default for DispatchOptions {
    fn default() -> Self {
        Self {
            batch_size: MAX_BATCH_SIZE,
        }
    }
}

/// Summary of a completed send run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchReport {
    pub batches: usize,
    pub records_sent: usize,
    /// Entries the sink reported as rejected inside accepted batches.
    pub failed_entries: usize,
}

/// Submits transactions to a sink in fixed-size batches, one call at a time.
#[derive(Debug)]
pub struct Dispatcher<S> {
    sink: S,
    options: DispatchOptions,
}

impl<S: EventSink> Dispatcher<S> {
    pub fn new(sink: S, options: DispatchOptions) -> Result<Self, DispatchError> {
        if options.batch_size == 0 || options.batch_size > MAX_BATCH_SIZE {
            return Err(DispatchError::InvalidOptions(format!(
                "batch_size must be between 1 and {MAX_BATCH_SIZE}, got {}",
                options.batch_size
            )));
        }
        Ok(Self { sink, options })
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Submit every transaction, writing `Sent <n> messages...` to `progress`
    /// after each accepted batch.
    ///
    /// The first failed submission aborts the run. Batches already accepted
    /// stay delivered.
    pub async fn send<W: Write>(
        &self,
        transactions: &[Transaction],
        progress: &mut W,
    ) -> Result<DispatchReport, DispatchError> {
        let start = Instant::now();
        let total_batches = transactions.len().div_ceil(self.options.batch_size);
        let mut report = DispatchReport::default();

        info!(
            event = "dispatch_started",
            sink = self.sink.name(),
            records = transactions.len(),
            batches = total_batches,
            "dispatch started"
        );

        for (index, batch) in transactions.chunks(self.options.batch_size).enumerate() {
            let entries = build_entries(batch);
            let ack = match self.sink.put_events(entries).await {
                Ok(ack) => ack,
                Err(err) => {
                    warn!(
                        event = "batch_failed",
                        batch = index + 1,
                        of = total_batches,
                        records_sent = report.records_sent,
                        error = %err,
                        "dispatch aborted"
                    );
                    return Err(err);
                }
            };

            report.batches += 1;
            report.records_sent += batch.len();
            if ack.failed_entries > 0 {
                report.failed_entries += ack.failed_entries;
                warn!(
                    event = "entries_rejected",
                    batch = index + 1,
                    failed_entries = ack.failed_entries,
                    "sink rejected entries"
                );
            }

            writeln!(progress, "Sent {} messages...", report.records_sent)?;
            progress.flush()?;
        }

        info!(
            event = "dispatch_finished",
            batches = report.batches,
            records_sent = report.records_sent,
            failed_entries = report.failed_entries,
            duration_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX),
            "dispatch completed"
        );
        Ok(report)
    }
}
