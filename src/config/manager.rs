use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use crate::paths;

fn default_provider() -> String {
    "qwen".to_string()
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/atrans/config.json`. Provider settings are kept
/// as raw JSON values here; the provider factory parses them into the typed
/// settings struct of the selected provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Name of the provider used for translation.
    #[serde(default = "default_provider")]
    pub current_provider: String,
    /// Provider settings keyed by provider name.
    #[serde(default)]
    pub providers: HashMap<String, Value>,
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            current_provider: default_provider(),
            providers: HashMap::new(),
        }
    }
}

/// Manages loading the configuration file.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a new config manager.
    ///
    /// Configuration is read from `$XDG_CONFIG_HOME/atrans/config.json`
    /// or `~/.config/atrans/config.json` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Self {
        Self {
            config_path: paths::config_dir().join("config.json"),
        }
    }

    pub const fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    pub fn load(&self) -> Result<ConfigFile> {
        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        let config_file: ConfigFile = serde_json::from_str(&contents).with_context(|| {
            format!(
                "Failed to parse config file: {}",
                self.config_path.display()
            )
        })?;

        Ok(config_file)
    }

    pub fn load_or_default(&self) -> ConfigFile {
        self.load().unwrap_or_default()
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;
    use tempfile::TempDir;

    fn create_test_manager(temp_dir: &TempDir) -> ConfigManager {
        ConfigManager {
            config_path: temp_dir.path().join("config.json"),
        }
    }

    fn write_config(manager: &ConfigManager, contents: &str) {
        let mut file = fs::File::create(manager.config_path()).unwrap();
        write!(file, "{contents}").unwrap();
    }

    #[test]
    fn test_load_full_config() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);

        write_config(
            &manager,
            r#"{
                "current_provider": "baidu",
                "providers": {
                    "qwen": {"api_key": "k", "base_url": "https://example.com/v1", "model": "qwen-plus"},
                    "baidu": {"appid": "123", "api_key": "k"}
                }
            }"#,
        );

        let config = manager.load().unwrap();
        assert_eq!(config.current_provider, "baidu");
        assert!(config.providers.contains_key("qwen"));
        assert!(config.providers.contains_key("baidu"));
        assert_eq!(config.providers["baidu"]["appid"], json!("123"));
    }

    #[test]
    fn test_current_provider_defaults_to_qwen() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);

        write_config(&manager, r#"{"providers": {"qwen": {}}}"#);

        let config = manager.load().unwrap();
        assert_eq!(config.current_provider, "qwen");
    }

    #[test]
    fn test_load_nonexistent_config() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);

        let result = manager.load();
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Failed to read config file")
        );
    }

    #[test]
    fn test_load_malformed_config() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);

        write_config(&manager, "{not json");

        let result = manager.load();
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Failed to parse config file")
        );
    }

    #[test]
    fn test_load_or_default_on_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);

        let config = manager.load_or_default();
        assert_eq!(config.current_provider, "qwen");
        assert!(config.providers.is_empty());
    }
}
