use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A DRH protocol message, one per output line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "UPPERCASE")]
pub enum Message {
    Schema {
        stream: String,
        schema: Value,
        key_properties: Vec<String>,
        /// Timestamp (UTC RFC 3339)
        emitted_at: String,
    },
    Record {
        stream: String,
        record: Value,
        emitted_at: String,
    },
    State {
        value: Value,
        emitted_at: String,
    },
}

impl Message {
    pub fn schema(stream: &str, schema: Value, key_properties: Option<Vec<String>>) -> Self {
        Self::Schema {
            stream: stream.to_string(),
            schema,
            key_properties: key_properties.unwrap_or_default(),
            emitted_at: now(),
        }
    }

    pub fn record(stream: &str, record: Value) -> Self {
        Self::Record {
            stream: stream.to_string(),
            record,
            emitted_at: now(),
        }
    }

    pub fn state(value: Value) -> Self {
        Self::State { value, emitted_at: now() }
    }

    /// The `type` discriminant as written on the wire
    pub fn kind(&self) -> &'static str {
        match self {
            Message::Schema { .. } => "SCHEMA",
            Message::Record { .. } => "RECORD",
            Message::State { .. } => "STATE",
        }
    }

    /// Stream name, if the message belongs to one
    pub fn stream(&self) -> Option<&str> {
        match self {
            Message::Schema { stream, .. } | Message::Record { stream, .. } => Some(stream.as_str()),
            Message::State { .. } => None,
        }
    }

    pub fn emitted_at(&self) -> &str {
        match self {
            Message::Schema { emitted_at, .. }
            | Message::Record { emitted_at, .. }
            | Message::State { emitted_at, .. } => emitted_at.as_str(),
        }
    }
}

fn now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}
