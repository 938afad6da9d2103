//! Delivery of generated transactions.
//!
//! Records are either written to a console stream as JSON lines or grouped
//! into batches and submitted to an [`EventSink`], EventBridge in production.

pub mod console;
pub mod dispatcher;
pub mod entry;
pub mod errors;
pub mod eventbridge;
pub mod sink;

pub use console::{print_json_lines, write_send_banner};
pub use dispatcher::{DispatchOptions, DispatchReport, Dispatcher, MAX_BATCH_SIZE};
pub use entry::{DETAIL_TYPE, EventEntry, SOURCE, build_entries};
pub use errors::DispatchError;
pub use eventbridge::{DEFAULT_REGION, EventBridgeSink, SinkConfig, verify_credentials};
pub use sink::{EventSink, SinkAck};
