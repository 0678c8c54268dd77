//! Server configuration

use biosync_classifiers::ModelsConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::Cli;

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Listen address
    #[serde(default = "default_listen")]
    pub listen: String,

    /// Listen port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Largest accepted request body
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,

    /// Model artifact locations
    #[serde(default)]
    pub models: ModelsConfig,
}

impl ServerConfig {
    /// Load configuration from file and CLI overrides
    pub fn load(config_path: &str, cli: &Cli) -> anyhow::Result<Self> {
        // Fall back to defaults when no file is present
        let mut config = if Path::new(config_path).exists() {
            let content = std::fs::read_to_string(config_path)?;
            serde_yaml::from_str(&content)?
        } else {
            Self::default()
        };

        if let Some(listen) = &cli.listen {
            config.listen = listen.clone();
        }

        if let Some(port) = cli.port {
            config.port = port;
        }

        if let Some(dir) = &cli.models_dir {
            config.models.dir = dir.clone();
        }

        Ok(config)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            port: default_port(),
            max_body_bytes: default_max_body_bytes(),
            models: ModelsConfig::default(),
        }
    }
}

fn default_listen() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_max_body_bytes() -> usize {
    16 * 1024
}

#[cfg(test)]
mod tests {
    use super::*;
    use biosync_core::ModelKind;
    use std::path::PathBuf;

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = ServerConfig::load("/nonexistent/biosync.yaml", &Cli::default()).unwrap();

        assert_eq!(config.listen, "0.0.0.0");
        assert_eq!(config.port, 8000);
        assert_eq!(config.models.dir, PathBuf::from("./models"));
    }

    #[test]
    fn test_file_and_cli_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(
            &path,
            r#"
port: 9100
models:
  dir: /var/lib/biosync
  rf:
    artifact: wesad_rf.json
"#,
        )
        .unwrap();

        let cli = Cli {
            listen: Some("127.0.0.1".to_string()),
            ..Default::default()
        };
        let config = ServerConfig::load(path.to_str().unwrap(), &cli).unwrap();

        assert_eq!(config.listen, "127.0.0.1");
        assert_eq!(config.port, 9100);
        assert_eq!(
            config.models.artifact_path(ModelKind::Rf),
            PathBuf::from("/var/lib/biosync/wesad_rf.json")
        );
        assert_eq!(
            config.models.artifact_path(ModelKind::Lite),
            PathBuf::from("/var/lib/biosync/biosync_lite.json")
        );

        let cli = Cli {
            port: Some(8080),
            models_dir: Some(PathBuf::from("/tmp/models")),
            ..Default::default()
        };
        let config = ServerConfig::load(path.to_str().unwrap(), &cli).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.models.dir, PathBuf::from("/tmp/models"));
    }

    #[test]
    fn test_invalid_yaml_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "port: not-a-number\n").unwrap();

        assert!(ServerConfig::load(path.to_str().unwrap(), &Cli::default()).is_err());
    }
}
