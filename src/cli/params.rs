use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::core::context::DeploymentEnvironment;

#[derive(Parser, Debug)]
#[command(name = "kafkaconf", about = "Render Kafka connection settings for this deployment")]
pub struct Params {
    /// TOML config file.
    #[arg(long, env = "KAFKACONF_CONFIG")]
    pub config: Option<PathBuf>,

    #[arg(long, env = "APP_ENV", value_enum)]
    pub environment: Option<DeploymentEnvironment>,

    /// Directory for certificate files, instead of the system temp directory.
    #[arg(long, env = "KAFKACONF_CERT_DIR")]
    pub cert_dir: Option<PathBuf>,

    /// JSON or TOML file of parameter values.
    #[arg(long, env = "KAFKACONF_PARAMS_FILE")]
    pub params_file: Option<PathBuf>,

    #[arg(long, env = "KAFKACONF_LOG_LEVEL")]
    pub log_level: Option<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `{ brokerUrl, schemaRegistryOptions, securityOptions }`
    Json,
    /// Keyed by `kafka.broker.url` and friends.
    Keyed,
    /// `key=value` client properties.
    Properties,
}
