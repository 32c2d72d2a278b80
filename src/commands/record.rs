use eyre::{Context, Result};
use std::io::{self, BufRead, Write};

use drh_target::loader::Loader;

use super::parse_json;

pub fn run(stream: &str, inline: Option<&str>) -> Result<()> {
    let mut loader = Loader::stdout();

    match inline {
        Some(json) => {
            let record = parse_json(json, "record")?;
            loader
                .emit_record(stream, &record)
                .context("Failed to emit RECORD message")
        }
        None => {
            let count = emit_lines(&mut loader, stream, io::stdin().lock())?;
            log::info!("Emitted {} records for stream {}", count, stream);
            Ok(())
        }
    }
}

/// Emit one RECORD per non-blank NDJSON line, returning how many were written
fn emit_lines<W: Write, R: BufRead>(loader: &mut Loader<W>, stream: &str, reader: R) -> Result<usize> {
    let mut count = 0;

    for (index, line) in reader.lines().enumerate() {
        let line_number = index + 1;
        let line = line.context(format!("Failed to read record line {} from stdin", line_number))?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let record: serde_json::Value =
            serde_json::from_str(trimmed).context(format!("Failed to parse record JSON on line {}", line_number))?;
        loader
            .emit_record(stream, &record)
            .context(format!("Failed to emit RECORD for line {}", line_number))?;
        count += 1;
    }

    Ok(count)
}
