use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ServerError, ServerResult};

pub const DEFAULT_PORT: u16 = 3000;

/// Server settings. Every field is optional in TOML and falls back to
/// [`ServerConfig::default`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// The catalog JSON document.
    pub data_path: PathBuf,
    /// The static page served at `/`.
    pub index_path: PathBuf,
    /// Hold one process-wide lock across each load/mutate/save cycle.
    /// Off by default, so concurrent mutations race and the last writer wins.
    pub serialize_writes: bool,
    /// Write the document to a temp file and rename it into place.
    pub atomic_writes: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT)),
            data_path: PathBuf::from("deportes.json"),
            index_path: PathBuf::from("index.html"),
            serialize_writes: false,
            atomic_writes: false,
        }
    }
}

impl ServerConfig {
    pub fn from_toml_str(s: &str) -> ServerResult<Self> {
        toml::from_str(s).map_err(|e| ServerError::Config(e.to_string()))
    }

    /// Read and parse a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> ServerResult<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let c = ServerConfig::default();
        assert_eq!(c.bind_addr, "0.0.0.0:3000".parse::<SocketAddr>().unwrap());
        assert_eq!(c.data_path, PathBuf::from("deportes.json"));
        assert_eq!(c.index_path, PathBuf::from("index.html"));
        assert!(!c.serialize_writes);
        assert!(!c.atomic_writes);
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let c = ServerConfig::from_toml_str(
            r#"
            bind_addr = "127.0.0.1:8080"
            serialize_writes = true
            "#,
        )
        .unwrap();
        assert_eq!(c.bind_addr.port(), 8080);
        assert!(c.serialize_writes);
        assert_eq!(c.data_path, PathBuf::from("deportes.json"));
    }

    #[test]
    fn empty_toml_is_default() {
        assert_eq!(ServerConfig::from_toml_str("").unwrap(), ServerConfig::default());
    }

    #[test]
    fn invalid_toml() {
        let err = ServerConfig::from_toml_str("bind_addr = 12").unwrap_err();
        assert!(matches!(err, ServerError::Config(_)));
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.toml");
        std::fs::write(&path, "data_path = \"/var/lib/catalog.json\"\natomic_writes = true\n").unwrap();

        let c = ServerConfig::load(&path).unwrap();
        assert_eq!(c.data_path, PathBuf::from("/var/lib/catalog.json"));
        assert!(c.atomic_writes);
    }

    #[test]
    fn load_missing_file() {
        let err = ServerConfig::load("/nonexistent/catalog.toml").unwrap_err();
        assert!(matches!(err, ServerError::Io(_)));
    }
}
