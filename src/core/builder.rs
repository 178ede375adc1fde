use kafkaconf_params::{ParameterError, ParameterSource};
use serde_json::Value;
use tracing::{debug, info};

use crate::core::certificates::{CertificateMaterial, CertificatePaths};
use crate::core::connection::{
    ConnectionConfig, RegistryCredentials, SchemaRegistryOptions, SecurityOptions,
};
use crate::core::constants::{
    KAFKA_BROKER_URL, KAFKA_SCHEMA_REGISTRY_PASSWORD, KAFKA_SCHEMA_REGISTRY_URL,
    KAFKA_SCHEMA_REGISTRY_USERNAME,
};
use crate::core::context::EnvironmentContext;
use crate::core::error::ConfigError;
use crate::core::fs::{FileSystem, OsFileSystem};
use crate::core::provider::ConfigProvider;

/// Assembles the Kafka connection settings for one deployment.
///
/// Outside dev/test the builder also pulls the TLS material out of the
/// parameter source and drops it into the file system's temp directory, so
/// the returned config can point the client at real files. Those files are
/// overwritten on every build and never cleaned up here.
///
/// Concurrent builds against the same temp directory race on those files;
/// callers are expected to build once per process.
pub struct ConnectionConfigBuilder<'a, F = OsFileSystem> {
    fs: F,
    parameters: Option<&'a dyn ParameterSource>,
}

impl<'a> ConnectionConfigBuilder<'a, OsFileSystem> {
    pub fn new() -> Self {
        Self::with_file_system(OsFileSystem::new())
    }
}

impl<'a> Default for ConnectionConfigBuilder<'a, OsFileSystem> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, F: FileSystem> ConnectionConfigBuilder<'a, F> {
    pub fn with_file_system(fs: F) -> Self {
        Self {
            fs,
            parameters: None,
        }
    }

    pub fn parameters(mut self, parameters: &'a dyn ParameterSource) -> Self {
        self.parameters = Some(parameters);
        self
    }

    pub fn set_parameters(&mut self, parameters: &'a dyn ParameterSource) {
        self.parameters = Some(parameters);
    }

    pub fn file_system(&self) -> &F {
        &self.fs
    }

    pub fn build(&self, context: &dyn EnvironmentContext) -> Result<ConnectionConfig, ConfigError> {
        let parameters = self.parameters.ok_or(ConfigError::MissingParameterSource)?;

        let broker_url = fetch_parameter(parameters, KAFKA_BROKER_URL)?;
        let registry_url = fetch_parameter(parameters, KAFKA_SCHEMA_REGISTRY_URL)?;

        // The context is asked once per branch; collaborators count on two reads.
        let schema_registry_options = if context.is_dev_or_test() {
            SchemaRegistryOptions::anonymous(registry_url)
        } else {
            let credentials = RegistryCredentials {
                username: fetch_parameter(parameters, KAFKA_SCHEMA_REGISTRY_USERNAME)?,
                password: fetch_parameter(parameters, KAFKA_SCHEMA_REGISTRY_PASSWORD)?,
            };
            SchemaRegistryOptions::authenticated(registry_url, credentials)
        };

        let security_options = if context.is_dev_or_test() {
            info!("dev/test environment, TLS disabled");
            SecurityOptions::default()
        } else {
            self.materialize_certificates(parameters)?
        };

        Ok(ConnectionConfig {
            broker_url,
            schema_registry_options,
            security_options,
        })
    }

    fn materialize_certificates(
        &self,
        parameters: &dyn ParameterSource,
    ) -> Result<SecurityOptions, ConfigError> {
        let material = CertificateMaterial::fetch(parameters)?;
        let dir = self.fs.temp_dir();
        let paths = CertificatePaths::in_dir(&dir);
        material.write_to(&self.fs, &paths)?;
        info!(dir = %dir.display(), "production environment, TLS enabled");
        Ok(SecurityOptions::ssl(&paths))
    }
}

impl<F: FileSystem> ConfigProvider for ConnectionConfigBuilder<'_, F> {
    fn name(&self) -> &'static str {
        "kafka.connection"
    }

    fn provide(&self, context: &dyn EnvironmentContext) -> Result<Value, ConfigError> {
        let config = self.build(context)?;
        Ok(Value::Object(config.keyed_entries()?))
    }
}

pub(crate) fn fetch_parameter(
    parameters: &dyn ParameterSource,
    name: &str,
) -> Result<String, ParameterError> {
    debug!(parameter = name, "fetching parameter");
    parameters.get(name)
}
