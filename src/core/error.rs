use std::io;
use std::path::PathBuf;
use thiserror::Error;
use kafkaconf_params::ParameterError;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("parameter source must be set")]
    MissingParameterSource,

    #[error(transparent)]
    Parameter(#[from] ParameterError),

    #[error("failed to write certificate to {path:?}: {source}")]
    CertificateWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("path {path:?} is not valid UTF-8")]
    NonUtf8Path { path: PathBuf },

    #[error("failed to render connection config: {0}")]
    Render(#[from] serde_json::Error),
}
