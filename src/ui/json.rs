//! NDJSON output: one JSON object per line on stdout.

use serde::Serialize;
use std::io::{self, Write};
use tracing::debug;

pub fn write_event<W: Write, T: Serialize>(out: &mut W, event: &T) -> io::Result<()> {
    let line =
        serde_json::to_string(event).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    out.write_all(line.as_bytes())?;
    out.write_all(b"\n")?;
    Ok(())
}

pub fn emit(event: serde_json::Value) -> io::Result<()> {
    emit_event(&event)
}

pub fn emit_event<T: Serialize>(event: &T) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_event(&mut out, event)
}

/// Emit a warning or error event whose loss must not mask the original
/// outcome. A failed write is logged and otherwise ignored.
pub fn emit_best_effort(event: serde_json::Value) {
    let mut out = io::stdout().lock();
    write_best_effort(&mut out, &event);
}

fn write_best_effort<W: Write, T: Serialize>(out: &mut W, event: &T) -> bool {
    match write_event(out, event) {
        Ok(()) => true,
        Err(e) => {
            debug!(error = %e, "dropped NDJSON event");
            false
        }
    }
}
