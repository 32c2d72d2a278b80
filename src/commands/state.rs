use eyre::{Context, Result};

use drh_target::loader::Loader;

use super::{parse_json, read_stdin};

pub fn run(inline: Option<&str>) -> Result<()> {
    let payload = match inline {
        Some(json) => json.to_string(),
        None => read_stdin("state")?,
    };

    let state = parse_json(&payload, "state")?;

    Loader::stdout()
        .emit_state(&state)
        .context("Failed to emit STATE message")
}
