use clap::{Parser, Subcommand, ValueEnum};
use std::io::IsTerminal;
use std::path::PathBuf;

/// Output format for commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// JSON format
    Json,
    /// YAML format
    Yaml,
}

impl OutputFormat {
    /// Resolve the effective output format.
    /// If user specified a format, use it.
    /// Otherwise: TTY → Text, non-TTY (pipe) → Json
    pub fn resolve(user_choice: Option<OutputFormat>) -> OutputFormat {
        match user_choice {
            Some(fmt) => fmt,
            None => {
                if std::io::stdout().is_terminal() {
                    OutputFormat::Text
                } else {
                    OutputFormat::Json
                }
            }
        }
    }
}

#[derive(Parser)]
#[command(
    name = "drh",
    about = "Emit Singer-style SCHEMA/RECORD/STATE messages as newline-delimited JSON",
    version = env!("GIT_DESCRIBE"),
    after_help = "Messages are written to stdout. Logs are written to: ~/.local/share/drh/logs/drh.log"
)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true, help = "Path to drh.yaml config file")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true, help = "Log at debug level")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Emit a SCHEMA message
    Schema {
        /// Stream name
        stream: String,

        /// Schema JSON (loaded from the schemas directory if not provided)
        schema: Option<String>,

        /// Key property of the stream (repeatable)
        #[arg(short, long = "key-property")]
        key_property: Vec<String>,

        /// Schema file to look up, if it differs from the stream name
        #[arg(long)]
        table: Option<String>,
    },

    /// Emit RECORD messages
    Record {
        /// Stream name
        stream: String,

        /// Record JSON (reads one record per line from stdin if not provided)
        record: Option<String>,
    },

    /// Emit a STATE message
    State {
        /// State JSON (reads from stdin if not provided)
        value: Option<String>,
    },

    /// List schemas available in the schemas directory
    Schemas,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show {
        /// Output format (default: text for TTY, json for pipes)
        #[arg(long, short = 'o', value_enum)]
        format: Option<OutputFormat>,
    },

    /// Get a configuration value
    Get {
        /// Configuration key
        key: String,
    },

    /// Set a configuration value
    Set {
        /// Configuration key
        key: String,

        /// New value
        value: String,
    },
}
