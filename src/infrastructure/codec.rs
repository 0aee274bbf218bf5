use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::Deserialize;
use serde_json::{Map, Value};
use thiserror::Error;

/// A job record: string keys to arbitrary JSON-compatible values.
pub type Record = Map<String, Value>;

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("invalid JSON record: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid YAML record: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("record is not a mapping")]
    NotAMapping,
}

/// Converts a record to and from the bytes of its file on disk.
pub trait RecordCodec: Send + Sync {
    /// File extension of the record file, without the dot.
    fn extension(&self) -> &'static str;

    fn decode(&self, bytes: &[u8]) -> Result<Record, CodecError>;

    fn encode(&self, record: &Record) -> Result<Vec<u8>, CodecError>;
}

pub struct JsonCodec;

impl RecordCodec for JsonCodec {
    fn extension(&self) -> &'static str {
        "json"
    }

    fn decode(&self, bytes: &[u8]) -> Result<Record, CodecError> {
        match serde_json::from_slice::<Value>(bytes)? {
            Value::Object(map) => Ok(map),
            _ => Err(CodecError::NotAMapping),
        }
    }

    fn encode(&self, record: &Record) -> Result<Vec<u8>, CodecError> {
        Ok(serde_json::to_vec_pretty(record)?)
    }
}

pub struct YamlCodec;

impl RecordCodec for YamlCodec {
    fn extension(&self) -> &'static str {
        "yaml"
    }

    fn decode(&self, bytes: &[u8]) -> Result<Record, CodecError> {
        match serde_yaml::from_slice::<Value>(bytes)? {
            Value::Object(map) => Ok(map),
            // An empty document
            Value::Null => Ok(Record::new()),
            _ => Err(CodecError::NotAMapping),
        }
    }

    fn encode(&self, record: &Record) -> Result<Vec<u8>, CodecError> {
        Ok(serde_yaml::to_string(record)?.into_bytes())
    }
}

#[derive(Debug, Error)]
#[error("unknown record format \"{0}\" (expected json or yaml)")]
pub struct UnknownFormat(pub String);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordFormat {
    Json,
    Yaml,
}

impl RecordFormat {
    pub fn codec(self) -> Arc<dyn RecordCodec> {
        match self {
            RecordFormat::Json => Arc::new(JsonCodec),
            RecordFormat::Yaml => Arc::new(YamlCodec),
        }
    }

    pub fn injects_id_by_default(self) -> bool {
        matches!(self, RecordFormat::Yaml)
    }
}

impl FromStr for RecordFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(RecordFormat::Json),
            "yaml" | "yml" => Ok(RecordFormat::Yaml),
            other => Err(UnknownFormat(other.to_string())),
        }
    }
}

impl fmt::Display for RecordFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordFormat::Json => f.write_str("json"),
            RecordFormat::Yaml => f.write_str("yaml"),
        }
    }
}
