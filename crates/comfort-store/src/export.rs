//! History export to CSV and JSON.

use std::io::Write;

use tracing::debug;

use comfort_types::History;

use crate::error::Result;

/// Write history as CSV, newest entry first.
///
/// Columns: `value,unit,time`. Set `header` to `false` when appending to an
/// existing file.
pub fn export_history_csv<W: Write>(history: &History, writer: W, header: bool) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    if header {
        wtr.write_record(["value", "unit", "time"])?;
    }
    for entry in history.recent() {
        let value = entry.value.to_string();
        wtr.write_record([value.as_str(), entry.unit.as_str(), entry.time.as_str()])?;
    }
    wtr.flush()?;

    debug!("Exported {} history entries as CSV", history.len());
    Ok(())
}

/// Write history as a JSON array, newest entry first.
pub fn export_history_json<W: Write>(history: &History, writer: W, pretty: bool) -> Result<()> {
    let entries: Vec<_> = history.recent().collect();
    if pretty {
        serde_json::to_writer_pretty(writer, &entries)?;
    } else {
        serde_json::to_writer(writer, &entries)?;
    }
    Ok(())
}
