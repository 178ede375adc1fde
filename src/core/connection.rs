use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::{Map, Value};

use crate::core::certificates::CertificatePaths;
use crate::core::error::ConfigError;
use crate::core::constants::{
    BOOTSTRAP_SERVERS, BROKER_URL_KEY, SCHEMA_REGISTRY_OPTIONS_KEY, SECURITY_OPTIONS_KEY,
};

/// Connection settings handed to the broker client.
///
/// Serializes as `{ brokerUrl, schemaRegistryOptions, securityOptions }`, in
/// that order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionConfig {
    pub broker_url: String,
    pub schema_registry_options: SchemaRegistryOptions,
    pub security_options: SecurityOptions,
}

impl ConnectionConfig {
    pub fn to_json_value(&self) -> Result<Value, serde_json::Error> {
        serde_json::to_value(self)
    }

    /// The same settings keyed by their container names
    /// (`kafka.broker.url`, `kafka.schema.registry.options`,
    /// `kafka.security.options`).
    pub fn keyed_entries(&self) -> Result<Map<String, Value>, serde_json::Error> {
        let mut entries = Map::new();
        entries.insert(BROKER_URL_KEY.to_string(), Value::String(self.broker_url.clone()));
        entries.insert(
            SCHEMA_REGISTRY_OPTIONS_KEY.to_string(),
            serde_json::to_value(&self.schema_registry_options)?,
        );
        entries.insert(
            SECURITY_OPTIONS_KEY.to_string(),
            serde_json::to_value(&self.security_options)?,
        );
        Ok(entries)
    }

    /// Flat client properties: `bootstrap.servers` followed by the security
    /// options, if any. Fails on certificate paths that are not valid UTF-8.
    pub fn client_properties(&self) -> Result<Vec<(String, String)>, ConfigError> {
        let mut props = vec![(BOOTSTRAP_SERVERS.to_string(), self.broker_url.clone())];
        props.extend(self.security_options.properties()?);
        Ok(props)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchemaRegistryOptions {
    pub url: String,
    #[serde(flatten)]
    pub credentials: Option<RegistryCredentials>,
}

impl SchemaRegistryOptions {
    pub fn anonymous(url: String) -> Self {
        Self {
            url,
            credentials: None,
        }
    }

    pub fn authenticated(url: String, credentials: RegistryCredentials) -> Self {
        Self {
            url,
            credentials: Some(credentials),
        }
    }
}

#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct RegistryCredentials {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for RegistryCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistryCredentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// TLS block for the broker client. Empty outside production.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct SecurityOptions {
    #[serde(flatten)]
    pub tls: Option<TlsOptions>,
}

impl SecurityOptions {
    pub fn ssl(paths: &CertificatePaths) -> Self {
        Self {
            tls: Some(TlsOptions {
                protocol: SecurityProtocol::Ssl,
                ca_location: paths.ca.clone(),
                certificate_location: paths.certificate.clone(),
                key_location: paths.key.clone(),
            }),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.tls.is_none()
    }

    pub fn properties(&self) -> Result<Vec<(String, String)>, ConfigError> {
        let Some(tls) = &self.tls else {
            return Ok(Vec::new());
        };
        Ok(vec![
            ("security.protocol".into(), tls.protocol.as_str().into()),
            ("ssl.ca.location".into(), path_property(&tls.ca_location)?),
            (
                "ssl.certificate.location".into(),
                path_property(&tls.certificate_location)?,
            ),
            ("ssl.key.location".into(), path_property(&tls.key_location)?),
        ])
    }
}

// Must name the exact file that was written; no lossy rendering.
fn path_property(path: &Path) -> Result<String, ConfigError> {
    path.to_str()
        .map(str::to_string)
        .ok_or_else(|| ConfigError::NonUtf8Path {
            path: path.to_path_buf(),
        })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TlsOptions {
    #[serde(rename = "security.protocol")]
    pub protocol: SecurityProtocol,
    #[serde(rename = "ssl.ca.location")]
    pub ca_location: PathBuf,
    #[serde(rename = "ssl.certificate.location")]
    pub certificate_location: PathBuf,
    #[serde(rename = "ssl.key.location")]
    pub key_location: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SecurityProtocol {
    Ssl,
}

impl SecurityProtocol {
    pub fn as_str(&self) -> &'static str {
        match self {
            SecurityProtocol::Ssl => "ssl",
        }
    }
}
