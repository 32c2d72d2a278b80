//! Schema lookup from a local directory of `<table>.json` files

use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Path a table's schema would live at
pub fn schema_path(schemas_dir: &Path, table_name: &str) -> PathBuf {
    schemas_dir.join(format!("{}.json", table_name))
}

/// Errors reading a schema file that exists
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("failed to read schema file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("schema file {} exists but failed to parse: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Load the JSON schema for `table_name`
///
/// Returns `Ok(None)` when no schema file exists; a file that is present but
/// unreadable or not valid JSON is an error.
pub fn load_schema(schemas_dir: &Path, table_name: &str) -> Result<Option<Value>, SchemaError> {
    let path = schema_path(schemas_dir, table_name);
    if !path.exists() {
        log::debug!("No schema for {} at {}", table_name, path.display());
        return Ok(None);
    }

    let content = fs::read_to_string(&path).map_err(|source| SchemaError::Read {
        path: path.clone(),
        source,
    })?;

    let schema = serde_json::from_str(&content).map_err(|source| SchemaError::Parse {
        path: path.clone(),
        source,
    })?;

    log::debug!("Loaded schema for {} from {}", table_name, path.display());
    Ok(Some(schema))
}

/// Table names with a schema file in `schemas_dir`, sorted
pub fn list_schemas(schemas_dir: &Path) -> Vec<String> {
    let entries = match fs::read_dir(schemas_dir) {
        Ok(entries) => entries,
        Err(e) => {
            log::debug!("Cannot read schemas dir {}: {}", schemas_dir.display(), e);
            return Vec::new();
        }
    };

    let mut names: Vec<String> = entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "json"))
        .filter_map(|path| path.file_stem().map(|s| s.to_string_lossy().to_string()))
        .collect();

    names.sort();
    names
}
