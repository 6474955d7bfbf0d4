//! JSON output for block data.

use super::row::BlockRow;
use std::error::Error;
use std::io::Write;

/// Write rows as a pretty-printed JSON array.
pub fn write_json<W: Write>(out: &mut W, rows: &[BlockRow]) -> Result<(), Box<dyn Error>> {
    serde_json::to_writer_pretty(&mut *out, rows)
        .map_err(|e| format!("Error serializing JSON: {e}"))?;
    writeln!(out)?;
    Ok(())
}
