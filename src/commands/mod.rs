pub mod completions;
pub mod config;
pub mod record;
pub mod schema;
pub mod schemas;
pub mod state;

use eyre::{Context, Result};
use std::io::{self, Read};

/// Parse an inline JSON argument
fn parse_json(input: &str, what: &str) -> Result<serde_json::Value> {
    serde_json::from_str(input).context(format!("Failed to parse {} JSON", what))
}

/// Read all of stdin as a string
fn read_stdin(what: &str) -> Result<String> {
    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .context(format!("Failed to read {} from stdin", what))?;
    Ok(buffer)
}
