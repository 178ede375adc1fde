pub mod cli;
mod config;
pub mod core;

pub use config::AppConfig;
pub use crate::core::builder::ConnectionConfigBuilder;
pub use crate::core::certificates::{CertificateMaterial, CertificatePaths};
pub use crate::core::connection::{
    ConnectionConfig, RegistryCredentials, SchemaRegistryOptions, SecurityOptions,
    SecurityProtocol, TlsOptions,
};
pub use crate::core::context::{DeploymentEnvironment, EnvironmentContext};
pub use crate::core::fs::{FileSystem, MemoryFileSystem, OsFileSystem};
pub use crate::core::provider::ConfigProvider;
pub use crate::core::ConfigError;

pub use kafkaconf_params::{
    EnvParameterSource, LayeredParameterSource, MemoryParameterPool, ParameterError,
    ParameterSource,
};
