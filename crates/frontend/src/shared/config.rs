use std::path::Path;

use contracts::shared::i18n::Locale;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    pub ui: UiConfig,
    pub api: ApiConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct UiConfig {
    #[serde(default)]
    pub locale: Locale,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    /// Prefix prepended to every backend path (e.g. "/api")
    pub base_path: String,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[ui]
locale = "zh-CN"

[api]
base_path = "/api"
"#;

impl Config {
    /// Parse configuration from TOML text
    pub fn from_toml(contents: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(contents)?)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ui: UiConfig {
                locale: Locale::default(),
            },
            api: ApiConfig {
                base_path: "/api".to_string(),
            },
        }
    }
}

/// Load configuration from a config.toml file
///
/// Search order:
/// 1. The given path, if it exists
/// 2. Falls back to embedded default config
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    if let Some(config_path) = path {
        if config_path.exists() {
            log::info!("Loading config from: {}", config_path.display());
            let contents = std::fs::read_to_string(config_path)?;
            return Config::from_toml(&contents);
        }
        log::warn!("config.toml not found at: {}", config_path.display());
    }

    log::info!("Using default embedded configuration");
    Config::from_toml(DEFAULT_CONFIG)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = Config::from_toml(DEFAULT_CONFIG).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.api.base_path, "/api");
    }

    #[test]
    fn test_missing_file_falls_back() {
        let config = load_config(Some(Path::new("/nonexistent/config.toml"))).unwrap();
        assert_eq!(config.ui.locale, Locale::ZhCn);
    }

    #[test]
    fn test_locale_override() {
        let config = Config::from_toml(
            r#"
[ui]
locale = "en-US"

[api]
base_path = "/inlong/manager/api"
"#,
        )
        .unwrap();
        assert_eq!(config.ui.locale, Locale::EnUs);
        assert_eq!(config.api.base_path, "/inlong/manager/api");
    }

    #[test]
    fn test_invalid_config_is_error() {
        assert!(Config::from_toml("[ui]\nlocale = \"fr\"\n[api]\nbase_path = \"/\"").is_err());
        assert!(Config::from_toml("[ui]").is_err());
    }
}
