use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};
use anyhow::{Context, Result};
use kafkaconf_params::MemoryParameterPool;

use crate::core::context::DeploymentEnvironment;

/// Process-level knobs. Every field can be overridden from the command line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Defaults to `development` when the file omits it, which builds
    /// without TLS and never fetches certificates. Production deployments
    /// must set it explicitly (or pass `--environment`/`APP_ENV`).
    pub environment: DeploymentEnvironment,

    /// Where certificate files go. `None` = the system temp directory.
    pub cert_dir: Option<PathBuf>,

    pub log_level: String,

    /// Lowest-priority parameter values, consulted after the environment
    /// and any params file.
    pub parameters: BTreeMap<String, String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: DeploymentEnvironment::Development,
            cert_dir: None,
            log_level: "info".to_string(),
            parameters: BTreeMap::new(),
        }
    }
}

impl AppConfig {

    pub fn load_or_default<P: AsRef<Path>>(path: Option<P>) -> Result<Self> {
        match path {
            Some(p) => Self::read_from_file(p), // propagate errors unchanged
            None => Ok(Self::default()),
        }
    }

    fn read_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let raw = fs::read_to_string(&path)
            .with_context(|| format!("reading {:?}", path.as_ref()))?;
        let cfg: AppConfig = toml::from_str(&raw)
            .with_context(|| "parsing kafkaconf config TOML")?;
        Ok(cfg)
    }

    pub fn parameter_pool(&self) -> MemoryParameterPool {
        self.parameters.clone().into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::context::EnvironmentContext;
    use kafkaconf_params::ParameterSource;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_toml(content: &str) -> NamedTempFile {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(content.as_bytes()).unwrap();
        f
    }

    #[test]
    fn no_path_gives_defaults() {
        let cfg = AppConfig::load_or_default(None::<&Path>).unwrap();
        assert_eq!(cfg, AppConfig::default());
        assert_eq!(cfg.environment, DeploymentEnvironment::Development);
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let f = write_toml("environment = \"prod\"\n");
        let cfg = AppConfig::load_or_default(Some(f.path())).unwrap();
        assert_eq!(cfg.environment, DeploymentEnvironment::Production);
        assert_eq!(cfg.log_level, "info");
        assert!(cfg.cert_dir.is_none());
    }

    #[test]
    fn omitted_environment_builds_without_tls() {
        let f = write_toml("log_level = \"debug\"\n");
        let cfg = AppConfig::load_or_default(Some(f.path())).unwrap();
        assert_eq!(cfg.environment, DeploymentEnvironment::Development);
        assert!(cfg.environment.is_dev_or_test());
    }

    #[test]
    fn parameters_table_becomes_pool() {
        let f = write_toml(
            r#"
cert_dir = "/run/kafka"

[parameters]
KAFKA_BROKER_URL = "PLAINTEXT://foo:9095"
"#,
        );
        let cfg = AppConfig::load_or_default(Some(f.path())).unwrap();
        assert_eq!(cfg.cert_dir, Some(PathBuf::from("/run/kafka")));
        let pool = cfg.parameter_pool();
        assert_eq!(pool.get("KAFKA_BROKER_URL").unwrap(), "PLAINTEXT://foo:9095");
    }

    #[test]
    fn missing_file_errors() {
        let path = Path::new("/nonexistent/kafkaconf.toml");
        let err = AppConfig::load_or_default(Some(path)).unwrap_err();
        assert!(err.to_string().contains("reading"));
    }

    #[test]
    fn unknown_environment_errors() {
        let f = write_toml("environment = \"qa\"\n");
        assert!(AppConfig::load_or_default(Some(f.path())).is_err());
    }
}
