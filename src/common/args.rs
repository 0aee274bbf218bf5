use std::collections::HashMap;

use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArgKind {
    Integer,
    Text,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArgValue {
    Integer(u64),
    Text(String),
}

impl ArgValue {
    pub fn into_integer(self) -> Option<u64> {
        match self {
            ArgValue::Integer(n) => Some(n),
            ArgValue::Text(_) => None,
        }
    }

    pub fn into_text(self) -> Option<String> {
        match self {
            ArgValue::Text(s) => Some(s),
            ArgValue::Integer(_) => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ArgError {
    #[error("Error - please specify a \"{0}\" field")]
    Missing(String),
    #[error("Error - field \"{0}\" is of incorrect type")]
    WrongType(String),
}

pub type ArgSchema = [(&'static str, ArgKind)];

pub const JOB_ID_SCHEMA: &ArgSchema = &[("jobID", ArgKind::Integer)];

pub const ASSET_SCHEMA: &ArgSchema = &[("jobID", ArgKind::Integer), ("assetName", ArgKind::Text)];

/// Collapses raw query pairs into a lookup that keeps the first value of a
/// repeated key.
pub fn first_values(pairs: Vec<(String, String)>) -> HashMap<String, String> {
    let mut params = HashMap::with_capacity(pairs.len());
    for (key, value) in pairs {
        params.entry(key).or_insert(value);
    }
    params
}

/// Checks `params` against `schema` in declaration order, stopping at the
/// first missing or unconvertible field.
pub fn check_args(
    params: &HashMap<String, String>,
    schema: &ArgSchema,
) -> Result<Vec<ArgValue>, ArgError> {
    schema
        .iter()
        .map(|&(name, kind)| {
            let raw = params
                .get(name)
                .ok_or_else(|| ArgError::Missing(name.to_string()))?;
            convert(raw, kind).ok_or_else(|| ArgError::WrongType(name.to_string()))
        })
        .collect()
}

fn convert(raw: &str, kind: ArgKind) -> Option<ArgValue> {
    match kind {
        ArgKind::Integer => raw.trim().parse::<u64>().ok().map(ArgValue::Integer),
        ArgKind::Text => Some(ArgValue::Text(raw.to_string())),
    }
}
