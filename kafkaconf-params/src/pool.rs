use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::{ParameterError, ParameterSource};

/// In-memory parameter pool, optionally seeded from a JSON or TOML file.
#[derive(Debug, Default, Clone)]
pub struct MemoryParameterPool {
    store: HashMap<String, String>, // name -> value
}

impl MemoryParameterPool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.store.insert(name.into(), value.into())
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.store.remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.store.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Reads a flat string-to-string table. Files ending in `.toml` are parsed
    /// as TOML, everything else as JSON.
    pub fn from_file(path: &Path) -> Result<Self, ParameterError> {
        let raw = fs::read_to_string(path).map_err(|source| ParameterError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let is_toml = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

        let store: HashMap<String, String> = if is_toml {
            toml::from_str(&raw).map_err(|e| ParameterError::Parse {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?
        } else {
            serde_json::from_str(&raw).map_err(|e| ParameterError::Parse {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?
        };

        Ok(Self { store })
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MemoryParameterPool {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            store: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl ParameterSource for MemoryParameterPool {
    fn get(&self, name: &str) -> Result<String, ParameterError> {
        self.store
            .get(name)
            .cloned()
            .ok_or_else(|| ParameterError::missing(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_hits_and_misses() {
        let pool = MemoryParameterPool::new().with("KAFKA_BROKER_URL", "PLAINTEXT://foo:9095");
        assert_eq!(pool.get("KAFKA_BROKER_URL").unwrap(), "PLAINTEXT://foo:9095");
        assert!(pool.get("KAFKA_CA").unwrap_err().is_missing());
    }

    #[test]
    fn removed_keys_become_missing() {
        let mut pool = MemoryParameterPool::new();
        assert!(pool.is_empty());

        assert_eq!(pool.insert("KAFKA_CA", "ca"), None);
        assert_eq!(pool.insert("KAFKA_CA", "ca-2"), Some("ca".to_string()));
        assert!(pool.contains("KAFKA_CA"));
        assert!(!pool.is_empty());

        assert_eq!(pool.remove("KAFKA_CA").as_deref(), Some("ca-2"));
        assert_eq!(pool.remove("KAFKA_CA"), None);
        assert!(!pool.contains("KAFKA_CA"));
        assert!(pool.is_empty());
        assert!(pool.get("KAFKA_CA").unwrap_err().is_missing());
    }

    #[test]
    fn empty_values_are_returned_as_is() {
        let pool: MemoryParameterPool =
            [("KAFKA_SCHEMA_REGISTRY_PASSWORD", "")].into_iter().collect();
        assert_eq!(pool.get("KAFKA_SCHEMA_REGISTRY_PASSWORD").unwrap(), "");
    }

    #[test]
    fn loads_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("params.json");
        fs::write(&path, r#"{"KAFKA_BROKER_URL": "SSL://broker:9093"}"#).unwrap();

        let pool = MemoryParameterPool::from_file(&path).unwrap();
        assert_eq!(pool.len(), 1);
        assert_eq!(pool.get("KAFKA_BROKER_URL").unwrap(), "SSL://broker:9093");
    }

    #[test]
    fn loads_toml_file_with_multiline_pem() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("params.toml");
        fs::write(
            &path,
            concat!(
                "KAFKA_CA = \"\"\"\n",
                "-----BEGIN CERTIFICATE-----\nabc\n-----END CERTIFICATE-----\n",
                "\"\"\"\n",
            ),
        )
        .unwrap();

        let pool = MemoryParameterPool::from_file(&path).unwrap();
        assert_eq!(
            pool.get("KAFKA_CA").unwrap(),
            "-----BEGIN CERTIFICATE-----\nabc\n-----END CERTIFICATE-----\n"
        );
    }

    #[test]
    fn non_string_values_fail_to_parse() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("params.json");
        fs::write(&path, r#"{"KAFKA_BROKER_URL": 9095}"#).unwrap();

        let err = MemoryParameterPool::from_file(&path).unwrap_err();
        assert!(matches!(err, ParameterError::Parse { .. }));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err =
            MemoryParameterPool::from_file(Path::new("/nonexistent/params.json")).unwrap_err();
        assert!(matches!(err, ParameterError::Io { .. }));
    }
}
