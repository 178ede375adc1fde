use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use kafkaconf_params::{ParameterError, ParameterSource};
use tracing::{info, warn};

use crate::core::builder::fetch_parameter;
use crate::core::constants::{
    CA_FILE_NAME, KAFKA_CA, KAFKA_USER_CERT, KAFKA_USER_KEY, USER_CERT_FILE_NAME,
    USER_KEY_FILE_NAME,
};
use crate::core::error::ConfigError;
use crate::core::fs::FileSystem;

/// PEM blobs for the broker's TLS client. Fetched fresh on every build.
#[derive(Clone, PartialEq, Eq)]
pub struct CertificateMaterial {
    pub ca: String,
    pub user_key: String,
    pub user_cert: String,
}

impl CertificateMaterial {
    pub fn fetch(parameters: &dyn ParameterSource) -> Result<Self, ParameterError> {
        Ok(Self {
            ca: fetch_parameter(parameters, KAFKA_CA)?,
            user_key: fetch_parameter(parameters, KAFKA_USER_KEY)?,
            user_cert: fetch_parameter(parameters, KAFKA_USER_CERT)?,
        })
    }

    /// Writes CA, key, then cert. Stops at the first failure; files already
    /// written stay in place.
    pub fn write_to<F: FileSystem + ?Sized>(
        &self,
        fs: &F,
        paths: &CertificatePaths,
    ) -> Result<(), ConfigError> {
        for (path, pem) in [
            (&paths.ca, &self.ca),
            (&paths.key, &self.user_key),
            (&paths.certificate, &self.user_cert),
        ] {
            fs.write(path, pem.as_bytes())
                .map_err(|source| ConfigError::CertificateWrite {
                    path: path.clone(),
                    source,
                })?;
            info!(path = %path.display(), bytes = pem.len(), "certificate written");
        }
        Ok(())
    }
}

impl fmt::Debug for CertificateMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CertificateMaterial")
            .field("ca", &format_args!("{} bytes", self.ca.len()))
            .field("user_key", &"<redacted>")
            .field("user_cert", &format_args!("{} bytes", self.user_cert.len()))
            .finish()
    }
}

/// Where the three PEM files live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertificatePaths {
    pub ca: PathBuf,
    pub certificate: PathBuf,
    pub key: PathBuf,
}

impl CertificatePaths {
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            ca: dir.join(CA_FILE_NAME),
            certificate: dir.join(USER_CERT_FILE_NAME),
            key: dir.join(USER_KEY_FILE_NAME),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        [self.ca.as_path(), self.certificate.as_path(), self.key.as_path()].into_iter()
    }

    /// Deletes the files. Already-missing files are skipped.
    ///
    /// The builder never calls this; whoever owns the broker client decides
    /// when the material is no longer needed.
    pub fn remove<F: FileSystem + ?Sized>(&self, fs: &F) -> io::Result<()> {
        for path in self.iter() {
            match fs.remove(path) {
                Ok(()) => info!(path = %path.display(), "certificate removed"),
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    warn!(path = %path.display(), "certificate already gone");
                }
                Err(e) => return Err(e),
            }
        }
        Ok(())
    }
}
