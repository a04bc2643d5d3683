use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Default public host of the redirector
pub const DEFAULT_HOST: &str = "gopkg.in";

/// Default host serving API documentation
pub const DEFAULT_DOCS_HOST: &str = "godoc.org";

/// Default base URL for GitHub API
pub const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";

/// Timeout for fetch operations in milliseconds (30 seconds)
pub const FETCH_TIMEOUT_MS: u64 = 30_000;

const APP_DIR: &str = "gopkg-page";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Page rendering configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct PageConfig {
    /// Host the import paths live under
    pub host: String,
    /// Host linked for API documentation
    pub docs_host: String,
    pub github: GitHubConfig,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            docs_host: DEFAULT_DOCS_HOST.to_string(),
            github: GitHubConfig::default(),
        }
    }
}

/// GitHub API configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct GitHubConfig {
    pub api_url: String,
    /// Request timeout in milliseconds
    pub timeout_ms: u64,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_GITHUB_API_URL.to_string(),
            timeout_ms: FETCH_TIMEOUT_MS,
        }
    }
}

impl PageConfig {
    /// Load the config from `path`, or from the default location when `None`.
    ///
    /// A missing default file yields the defaults; an explicit path must exist.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let path = config_path();
                if path.exists() {
                    Self::from_file(&path)
                } else {
                    debug!("No config at {:?}, using defaults", path);
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Returns the path to the config directory for gopkg-page.
/// Uses $XDG_CONFIG_HOME/gopkg-page if XDG_CONFIG_HOME is set,
/// otherwise falls back to ~/.config/gopkg-page,
/// or ./gopkg-page if neither is available.
pub fn config_dir() -> PathBuf {
    config_dir_with_env(std::env::var("XDG_CONFIG_HOME").ok(), dirs::home_dir())
}

/// Returns the path to the default config file.
pub fn config_path() -> PathBuf {
    config_dir().join("config.json")
}

/// Returns the default path of the log file.
pub fn log_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
        .join("gopkg-page.log")
}

fn config_dir_with_env(xdg_config_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    let config_dir = xdg_config_home
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".config")))
        .unwrap_or_else(|| PathBuf::from("."));

    config_dir.join(APP_DIR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    #[test]
    fn page_config_from_partial_object_uses_defaults_for_missing_fields() {
        let result = serde_json::from_value::<PageConfig>(json!({
            "docsHost": "pkg.go.dev"
        }))
        .unwrap();

        assert_eq!(result.docs_host, "pkg.go.dev");
        assert_eq!(result.host, DEFAULT_HOST);
        assert_eq!(result.github, GitHubConfig::default());
    }

    #[test]
    fn page_config_from_full_object_parses_all_fields() {
        let result = serde_json::from_value::<PageConfig>(json!({
            "host": "pkg.example.com",
            "docsHost": "docs.example.com",
            "github": {
                "apiUrl": "http://localhost:8080",
                "timeoutMs": 500
            }
        }))
        .unwrap();

        assert_eq!(
            result,
            PageConfig {
                host: "pkg.example.com".to_string(),
                docs_host: "docs.example.com".to_string(),
                github: GitHubConfig {
                    api_url: "http://localhost:8080".to_string(),
                    timeout_ms: 500,
                },
            }
        );
    }

    #[test]
    fn from_file_reads_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"host": "go.example.org"}}"#).unwrap();

        let result = PageConfig::load(Some(file.path())).unwrap();

        assert_eq!(result.host, "go.example.org");
        assert_eq!(result.docs_host, DEFAULT_DOCS_HOST);
    }

    #[test]
    fn from_file_reports_missing_explicit_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let result = PageConfig::load(Some(dir.path().join("missing.json").as_path()));

        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }

    #[test]
    fn from_file_reports_invalid_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let result = PageConfig::from_file(file.path());

        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn config_dir_with_env_uses_xdg_config_home_when_set() {
        let path = config_dir_with_env(
            Some("/tmp/test-config".to_string()),
            Some(PathBuf::from("/home/user")),
        );

        assert_eq!(path, PathBuf::from("/tmp/test-config/gopkg-page"));
    }

    #[test]
    fn config_dir_with_env_falls_back_to_home_config() {
        let path = config_dir_with_env(None, Some(PathBuf::from("/home/user")));

        assert_eq!(path, PathBuf::from("/home/user/.config/gopkg-page"));
    }

    #[test]
    fn config_dir_with_env_falls_back_to_current_dir_when_no_dirs_available() {
        let path = config_dir_with_env(None, None);
        assert_eq!(path, PathBuf::from("./gopkg-page"));
    }
}
