//! Configuration parsing and management.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    ParseError(#[from] serde_yaml::Error),
}

/// Main configuration struct matching the mdpages.yml schema.
///
/// Every field has a built-in default, so an absent config file is
/// equivalent to an empty one. CLI flags override these values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub paths: PathsConfig,

    #[serde(default)]
    pub server: ServerConfig,

    // Internal: path to config file (for relative path resolution)
    #[serde(skip)]
    config_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Directory containing markdown sources.
    #[serde(default = "default_markdown_dir")]
    pub markdown: PathBuf,

    /// Directory the rendered pages are written to and served from.
    #[serde(default = "default_pages_dir")]
    pub pages: PathBuf,
}

fn default_markdown_dir() -> PathBuf {
    PathBuf::from("posts")
}

fn default_pages_dir() -> PathBuf {
    PathBuf::from("pages")
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_port() -> u16 {
    8080
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let mut config: Config = serde_yaml::from_str(&contents)?;

        // Store config file path for relative path resolution
        config.config_path = Some(path.to_path_buf());

        Ok(config)
    }

    /// Get the markdown source directory, resolved relative to the config file
    pub fn markdown_dir(&self) -> PathBuf {
        self.resolve_path(&self.paths.markdown)
    }

    /// Get the pages directory, resolved relative to the config file
    pub fn pages_dir(&self) -> PathBuf {
        self.resolve_path(&self.paths.pages)
    }

    /// Resolve a path relative to the config file location
    fn resolve_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else if let Some(config_path) = &self.config_path {
            if let Some(parent) = config_path.parent() {
                parent.join(path)
            } else {
                path.to_path_buf()
            }
        } else {
            path.to_path_buf()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            paths: PathsConfig::default(),
            server: ServerConfig::default(),
            config_path: None,
        }
    }
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            markdown: default_markdown_dir(),
            pages: default_pages_dir(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_default_values() {
        let config = Config::default();

        assert_eq!(config.paths.markdown, PathBuf::from("posts"));
        assert_eq!(config.paths.pages, PathBuf::from("pages"));
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("mdpages.yml");
        fs::write(
            &config_path,
            r#"
server:
  port: 9000
"#,
        )
        .unwrap();

        let config = Config::from_file(&config_path).unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.paths.pages, PathBuf::from("pages"));
    }

    #[test]
    fn test_paths_resolve_relative_to_config_file() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("mdpages.yml");
        fs::write(
            &config_path,
            r#"
paths:
  markdown: "content/md"
  pages: "site"
"#,
        )
        .unwrap();

        let config = Config::from_file(&config_path).unwrap();
        assert_eq!(config.markdown_dir(), dir.path().join("content/md"));
        assert_eq!(config.pages_dir(), dir.path().join("site"));
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("mdpages.yml");
        fs::write(&config_path, "paths: [not, a, mapping]").unwrap();

        assert!(matches!(
            Config::from_file(&config_path),
            Err(ConfigError::ParseError(_))
        ));
    }
}
