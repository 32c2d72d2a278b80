use colored::*;
use eyre::Result;

use drh_target::config::Config;
use drh_target::schema;

pub fn run(config: &Config) -> Result<()> {
    let schemas_dir = config.schemas_dir();
    let names = schema::list_schemas(&schemas_dir);

    if names.is_empty() {
        eprintln!("{} No schemas found in {}", "⚠".yellow(), schemas_dir.display());
        return Ok(());
    }

    for name in names {
        println!("{}", name);
    }

    Ok(())
}
