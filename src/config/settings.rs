use std::path::PathBuf;

use serde::Deserialize;

use crate::config::env::{self, EnvKey};
use crate::infrastructure::codec::{RecordFormat, UnknownFormat};

#[derive(Clone, Debug, Deserialize)]
pub struct AppConfig {
    pub server_host: String,
    pub server_port: u16,
    pub tls: bool,
    pub jobs_root: PathBuf,
    pub format: RecordFormat,
    /// Add `id` to checked-out records. Not persisted.
    pub inject_id: bool,
}

impl AppConfig {
    pub fn new() -> Result<Self, UnknownFormat> {
        Self::from_lookup(env::lookup)
    }

    pub fn from_lookup(lookup: impl Fn(EnvKey) -> Option<String>) -> Result<Self, UnknownFormat> {
        let format: RecordFormat = env::or_default(lookup(EnvKey::JobFormat), "json").parse()?;

        Ok(Self {
            server_host: env::or_default(lookup(EnvKey::ServerHost), "0.0.0.0"),
            server_port: env::parsed_or(lookup(EnvKey::ServerPort), 5000),
            tls: env::parsed_or(lookup(EnvKey::Tls), true),
            jobs_root: PathBuf::from(env::or_default(lookup(EnvKey::JobsRoot), "./jobs")),
            format,
            inject_id: env::parsed_or(lookup(EnvKey::InjectJobId), format.injects_id_by_default()),
        })
    }

    /// Configuration for serving `jobs_root` with defaults for everything else.
    pub fn with_jobs_root(jobs_root: impl Into<PathBuf>, format: RecordFormat) -> Self {
        Self {
            server_host: "127.0.0.1".to_string(),
            server_port: 5000,
            tls: false,
            jobs_root: jobs_root.into(),
            format,
            inject_id: format.injects_id_by_default(),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn from_vars(vars: &[(&str, &str)]) -> Result<AppConfig, UnknownFormat> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key.as_str()).cloned())
    }

    #[test]
    fn defaults_match_legacy_server() {
        let config = from_vars(&[]).unwrap();

        assert_eq!(config.bind_addr(), "0.0.0.0:5000");
        assert!(config.tls);
        assert_eq!(config.jobs_root, PathBuf::from("./jobs"));
        assert_eq!(config.format, RecordFormat::Json);
        assert!(!config.inject_id);
    }

    #[test]
    fn inject_id_follows_format_by_default() {
        let yaml = from_vars(&[("JOB_FORMAT", "yaml")]).unwrap();
        assert!(yaml.inject_id);

        let json = AppConfig::with_jobs_root("jobs", RecordFormat::Json);
        assert!(!json.inject_id);
        assert_eq!(json.bind_addr(), "127.0.0.1:5000");
    }

    #[test]
    fn inject_id_can_be_overridden() {
        let yaml = from_vars(&[("JOB_FORMAT", "yaml"), ("INJECT_JOB_ID", "false")]).unwrap();
        assert!(!yaml.inject_id);

        let json = from_vars(&[("JOB_FORMAT", "json"), ("INJECT_JOB_ID", "true")]).unwrap();
        assert!(json.inject_id);
    }

    #[test]
    fn unknown_format_is_rejected() {
        let err = from_vars(&[("JOB_FORMAT", "toml")]).unwrap_err();
        assert_eq!(err.0, "toml");
    }

    #[test]
    fn malformed_values_fall_back_to_defaults() {
        let config = from_vars(&[
            ("APP_PORT", "not-a-port"),
            ("APP_TLS", "maybe"),
            ("INJECT_JOB_ID", "sometimes"),
        ])
        .unwrap();

        assert_eq!(config.server_port, 5000);
        assert!(config.tls);
        assert!(!config.inject_id);
    }

    #[test]
    fn explicit_values_are_used() {
        let config = from_vars(&[
            ("APP_HOST", "127.0.0.1"),
            ("APP_PORT", " 8443 "),
            ("APP_TLS", "false"),
            ("JOBS_ROOT", "/srv/jobs"),
        ])
        .unwrap();

        assert_eq!(config.bind_addr(), "127.0.0.1:8443");
        assert!(!config.tls);
        assert_eq!(config.jobs_root, PathBuf::from("/srv/jobs"));
    }
}
