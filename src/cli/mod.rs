pub mod params;

use std::str::FromStr;

use anyhow::{Context, Result};
use kafkaconf_params::{LayeredParameterSource, MemoryParameterPool, ParameterSource};
use tracing::{info, Level};

use crate::config::AppConfig;
use crate::core::builder::ConnectionConfigBuilder;
use crate::core::fs::OsFileSystem;
use crate::core::provider::ConfigProvider;
use params::{OutputFormat, Params};

/// Logs go to stderr; stdout carries the rendered config.
pub fn init_logging(level: &str) -> Result<()> {
    let level = parse_log_level(level)?;
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(true)
        .with_writer(std::io::stderr)
        .compact()
        .init();
    Ok(())
}

pub fn parse_log_level(level: &str) -> Result<Level> {
    Level::from_str(level).with_context(|| format!("invalid log level {level:?}"))
}

/// Resolves parameters (`env` first, then the params file, then the
/// `[parameters]` table of `app_config`), builds the connection config and
/// renders it in the requested format.
pub fn run(params: &Params, app_config: &AppConfig, env: &dyn ParameterSource) -> Result<String> {
    let environment = params.environment.unwrap_or(app_config.environment);
    let fs = match params.cert_dir.as_ref().or(app_config.cert_dir.as_ref()) {
        Some(dir) => OsFileSystem::with_temp_dir(dir),
        None => OsFileSystem::new(),
    };

    let file_pool = match &params.params_file {
        Some(path) => MemoryParameterPool::from_file(path)
            .with_context(|| format!("loading parameters from {:?}", path))?,
        None => MemoryParameterPool::new(),
    };
    let config_pool = app_config.parameter_pool();
    let parameters = LayeredParameterSource::new()
        .push(env)
        .push(&file_pool)
        .push(&config_pool);

    info!(%environment, "building kafka connection config");
    let builder = ConnectionConfigBuilder::with_file_system(fs).parameters(&parameters);

    let rendered = match params.format {
        OutputFormat::Json => {
            let config = builder
                .build(&environment)
                .context("building kafka connection config")?;
            serde_json::to_string_pretty(&config)?
        }
        OutputFormat::Keyed => {
            let value = builder
                .provide(&environment)
                .context("building kafka connection config")?;
            serde_json::to_string_pretty(&value)?
        }
        OutputFormat::Properties => builder
            .build(&environment)
            .context("building kafka connection config")?
            .client_properties()
            .context("rendering client properties")?
            .into_iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect::<Vec<_>>()
            .join("\n"),
    };
    Ok(rendered)
}
