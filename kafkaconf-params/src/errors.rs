use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParameterError {
    #[error("Parameter {name} is not set")]
    Missing { name: String },

    #[error("Parameter {name} has an invalid value: {reason}")]
    InvalidValue { name: String, reason: String },

    #[error("IoError reading {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Parameter file {path:?} could not be parsed: {reason}")]
    Parse { path: PathBuf, reason: String },
}

impl ParameterError {
    pub fn missing(name: &str) -> Self {
        ParameterError::Missing {
            name: name.to_string(),
        }
    }

    /// True when the key is simply absent, as opposed to a broken source.
    pub fn is_missing(&self) -> bool {
        matches!(self, ParameterError::Missing { .. })
    }
}
