use std::io::Write;

use serde::Serialize;

use crate::errors::DispatchError;

/// Write one JSON document per record, in order. Returns the lines written.
///
/// The first record that fails to serialize aborts the whole write.
pub fn print_json_lines<T, W>(records: &[T], out: &mut W) -> Result<usize, DispatchError>
where
    T: Serialize,
    W: Write,
{
    for record in records {
        let line = serde_json::to_string(record)?;
        writeln!(out, "{line}")?;
    }
    out.flush()?;
    Ok(records.len())
}

/// Announce a send run before the sink is established.
pub fn write_send_banner<W: Write>(requested: i64, out: &mut W) -> Result<(), DispatchError> {
    writeln!(out, "Sending {requested} Transactions to EventBridge...")?;
    out.flush()?;
    Ok(())
}
