use std::env;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnvKey {
    ServerHost,
    ServerPort,
    Tls,
    JobsRoot,
    JobFormat,
    InjectJobId,
}

impl EnvKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            EnvKey::ServerHost => "APP_HOST",
            EnvKey::ServerPort => "APP_PORT",
            EnvKey::Tls => "APP_TLS",
            EnvKey::JobsRoot => "JOBS_ROOT",
            EnvKey::JobFormat => "JOB_FORMAT",
            EnvKey::InjectJobId => "INJECT_JOB_ID",
        }
    }
}

pub fn get(key: EnvKey) -> Result<String, env::VarError> {
    env::var(key.as_str())
}

/// Process environment as a lookup function.
pub fn lookup(key: EnvKey) -> Option<String> {
    get(key).ok()
}

pub fn or_default(value: Option<String>, default: &str) -> String {
    value.unwrap_or_else(|| default.to_string())
}

/// Parses `value`, falling back to `default` when absent or malformed.
pub fn parsed_or<T: FromStr>(value: Option<String>, default: T) -> T {
    match value {
        Some(val) => val.trim().parse::<T>().unwrap_or(default),
        None => default,
    }
}
