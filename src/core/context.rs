use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Tells the builder which branch to take.
pub trait EnvironmentContext {
    fn is_dev_or_test(&self) -> bool;
}

impl<T: EnvironmentContext + ?Sized> EnvironmentContext for &T {
    fn is_dev_or_test(&self) -> bool {
        (**self).is_dev_or_test()
    }
}

impl EnvironmentContext for bool {
    fn is_dev_or_test(&self) -> bool {
        *self
    }
}

/// Deployment tier. The default is `Development`, which takes the no-TLS
/// branch; only `Staging` and `Production` fetch and write certificates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DeploymentEnvironment {
    #[default]
    #[serde(alias = "dev")]
    #[value(alias = "dev")]
    Development,

    Test,

    #[serde(alias = "stage")]
    #[value(alias = "stage")]
    Staging,

    #[serde(alias = "prod")]
    #[value(alias = "prod")]
    Production,
}

impl DeploymentEnvironment {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeploymentEnvironment::Development => "development",
            DeploymentEnvironment::Test => "test",
            DeploymentEnvironment::Staging => "staging",
            DeploymentEnvironment::Production => "production",
        }
    }
}

impl fmt::Display for DeploymentEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Staging talks to real brokers, so it gets the production treatment.
impl EnvironmentContext for DeploymentEnvironment {
    fn is_dev_or_test(&self) -> bool {
        matches!(
            self,
            DeploymentEnvironment::Development | DeploymentEnvironment::Test
        )
    }
}
