use std::env::{self, VarError};

use tracing::debug;

use crate::{ParameterError, ParameterSource};

/// Reads parameters from the process environment.
#[derive(Debug, Clone, Default)]
pub struct EnvParameterSource {
    prefix: Option<String>,
}

impl EnvParameterSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// `with_prefix("APP_")` resolves `KAFKA_CA` from `APP_KAFKA_CA`.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: Some(prefix.into()),
        }
    }

    fn var_name(&self, name: &str) -> String {
        match &self.prefix {
            Some(prefix) => format!("{prefix}{name}"),
            None => name.to_string(),
        }
    }
}

impl ParameterSource for EnvParameterSource {
    fn get(&self, name: &str) -> Result<String, ParameterError> {
        let var = self.var_name(name);
        match env::var(&var) {
            Ok(value) => {
                debug!(var = %var, "resolved parameter from environment");
                Ok(value)
            }
            Err(VarError::NotPresent) => Err(ParameterError::missing(name)),
            Err(VarError::NotUnicode(_)) => Err(ParameterError::InvalidValue {
                name: name.to_string(),
                reason: format!("{var} is not valid unicode"),
            }),
        }
    }
}
