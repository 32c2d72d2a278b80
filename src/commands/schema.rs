use eyre::{Context, Result};
use std::io::Write;

use drh_target::config::Config;
use drh_target::loader::Loader;
use drh_target::schema;

use super::parse_json;

pub fn run(
    stream: &str,
    inline: Option<&str>,
    key_properties: Vec<String>,
    table: Option<&str>,
    config: &Config,
) -> Result<()> {
    let mut loader = Loader::stdout();
    emit(&mut loader, stream, inline, key_properties, table, config)
}

fn emit<W: Write>(
    loader: &mut Loader<W>,
    stream: &str,
    inline: Option<&str>,
    key_properties: Vec<String>,
    table: Option<&str>,
    config: &Config,
) -> Result<()> {
    let schema = match inline {
        Some(json) => parse_json(json, "schema")?,
        None => {
            let schemas_dir = config.schemas_dir();
            let table = table.unwrap_or(stream);
            schema::load_schema(&schemas_dir, table)
                .context(format!("Failed to load schema for table '{}'", table))?
                .ok_or_else(|| {
                    eyre::eyre!(
                        "No schema found for table '{}' (looked in {})",
                        table,
                        schema::schema_path(&schemas_dir, table).display()
                    )
                })?
        }
    };

    let key_properties = if key_properties.is_empty() { None } else { Some(key_properties) };

    loader
        .emit_schema(stream, &schema, key_properties)
        .context("Failed to emit SCHEMA message")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};
    use std::fs;
    use tempfile::TempDir;

    fn config_with_schemas(dir: &TempDir) -> Config {
        Config {
            schemas_dir: dir.path().to_path_buf(),
            ..Config::default()
        }
    }

    fn emitted(loader: Loader<Vec<u8>>) -> Value {
        let text = String::from_utf8(loader.into_inner()).unwrap();
        serde_json::from_str(text.trim_end()).unwrap()
    }

    #[test]
    fn test_inline_schema() {
        let dir = TempDir::new().unwrap();
        let mut loader = Loader::new(Vec::new());

        emit(
            &mut loader,
            "users",
            Some(r#"{"type":"object"}"#),
            vec!["id".to_string()],
            None,
            &config_with_schemas(&dir),
        )
        .unwrap();

        let msg = emitted(loader);
        assert_eq!(msg["type"], "SCHEMA");
        assert_eq!(msg["schema"], json!({"type": "object"}));
        assert_eq!(msg["key_properties"], json!(["id"]));
    }

    #[test]
    fn test_schema_from_table_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("app_users.json"), r#"{"type":"object","title":"users"}"#).unwrap();
        let mut loader = Loader::new(Vec::new());

        emit(&mut loader, "users", None, vec![], Some("app_users"), &config_with_schemas(&dir)).unwrap();

        let msg = emitted(loader);
        assert_eq!(msg["stream"], "users");
        assert_eq!(msg["schema"]["title"], "users");
        assert_eq!(msg["key_properties"], json!([]));
    }

    #[test]
    fn test_missing_schema_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let mut loader = Loader::new(Vec::new());

        let err = emit(&mut loader, "orders", None, vec![], None, &config_with_schemas(&dir)).unwrap_err();

        assert!(err.to_string().contains("orders"));
        assert!(loader.into_inner().is_empty());
    }

    #[test]
    fn test_unparseable_schema_file_is_reported() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("users.json"), "{ not json").unwrap();
        let mut loader = Loader::new(Vec::new());

        let err = emit(&mut loader, "users", None, vec![], None, &config_with_schemas(&dir)).unwrap_err();

        let chain = format!("{:?}", err);
        assert!(chain.contains("exists but failed to parse"));
        assert!(!chain.contains("No schema found"));
        assert!(loader.into_inner().is_empty());
    }

    #[test]
    fn test_invalid_inline_schema() {
        let dir = TempDir::new().unwrap();
        let mut loader = Loader::new(Vec::new());

        let result = emit(&mut loader, "users", Some("{oops"), vec![], None, &config_with_schemas(&dir));
        assert!(result.is_err());
    }
}
