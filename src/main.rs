use anyhow::Result;
use clap::Parser;
use kafkaconf::cli::{self, params::Params};
use kafkaconf::{AppConfig, EnvParameterSource};

fn main() -> Result<()> {
    let params = Params::parse();
    let app_config = AppConfig::load_or_default(params.config.as_ref())?;

    cli::init_logging(params.log_level.as_deref().unwrap_or(&app_config.log_level))?;

    let output = cli::run(&params, &app_config, &EnvParameterSource::new())?;
    println!("{output}");
    Ok(())
}
