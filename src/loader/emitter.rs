//! Line-oriented message emitter

use serde::Serialize;
use std::io::{self, Stdout, Write};

use super::error::LoaderError;
use super::message::Message;

/// Writes SCHEMA/RECORD/STATE messages as newline-delimited JSON
///
/// Every emit call writes exactly one line and flushes before returning,
/// so a downstream target sees each message as soon as it is produced.
pub struct Loader<W: Write> {
    out: W,
}

impl Loader<Stdout> {
    /// Create a loader that writes to the process stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Loader<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Emit a SCHEMA message; `key_properties` defaults to `[]`
    pub fn emit_schema<S: Serialize + ?Sized>(
        &mut self,
        stream_name: &str,
        schema: &S,
        key_properties: Option<Vec<String>>,
    ) -> Result<(), LoaderError> {
        let schema = serde_json::to_value(schema)?;
        self.write(&Message::schema(stream_name, schema, key_properties))
    }

    /// Emit a RECORD message
    pub fn emit_record<R: Serialize + ?Sized>(&mut self, stream_name: &str, record: &R) -> Result<(), LoaderError> {
        let record = serde_json::to_value(record)?;
        self.write(&Message::record(stream_name, record))
    }

    /// Emit a STATE message
    pub fn emit_state<S: Serialize + ?Sized>(&mut self, state: &S) -> Result<(), LoaderError> {
        let value = serde_json::to_value(state)?;
        self.write(&Message::state(value))
    }

    /// Give back the underlying writer
    pub fn into_inner(self) -> W {
        self.out
    }

    fn write(&mut self, message: &Message) -> Result<(), LoaderError> {
        // Compact encoding escapes control characters, so the line never contains '\n'
        let mut line = serde_json::to_string(message)?;
        line.push('\n');

        self.out.write_all(line.as_bytes())?;
        self.out.flush()?;

        match message.stream() {
            Some(stream) => log::debug!("Emitted {} for stream {}", message.kind(), stream),
            None => log::debug!("Emitted {}", message.kind()),
        }
        log::trace!("{}", line.trim_end());

        Ok(())
    }
}
