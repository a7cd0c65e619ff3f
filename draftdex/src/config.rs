use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DexConfig {
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    #[serde(default = "default_retry_delay_seconds")]
    pub retry_delay_seconds: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default = "default_console_log_level")]
    pub console_log_level: String,

    #[serde(default = "default_log_dir")]
    pub log_dir: String,

    #[serde(default = "default_color")]
    pub color: bool,
}

fn default_api_base_url() -> String {
    "https://pokeapi.co/api/v2".to_string()
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_max_retries() -> u32 {
    3
}

fn default_retry_delay_seconds() -> u64 {
    1
}

fn default_user_agent() -> String {
    format!("draftdex/{}", env!("CARGO_PKG_VERSION"))
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_console_log_level() -> String {
    "warn".to_string()
}

fn default_log_dir() -> String {
    "logs".to_string()
}

fn default_color() -> bool {
    true
}

impl Default for DexConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            request_timeout_secs: default_request_timeout_secs(),
            max_retries: default_max_retries(),
            retry_delay_seconds: default_retry_delay_seconds(),
            user_agent: default_user_agent(),
            log_level: default_log_level(),
            console_log_level: default_console_log_level(),
            log_dir: default_log_dir(),
            color: default_color(),
        }
    }
}

impl DexConfig {
    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config: DexConfig = toml::from_str(content)?;
        Ok(config)
    }

    /// Read `path` if it exists, otherwise fall back to defaults.
    /// A file that exists but does not parse is still an error.
    pub fn load_or_default(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::from_file(path)
    }

    /// `{api_base_url}/pokemon/{slug}`, slug percent-encoded
    pub fn pokemon_url(&self, slug: &str) -> String {
        format!(
            "{}/pokemon/{}",
            self.api_base_url.trim_end_matches('/'),
            urlencoding::encode(slug)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_file() {
        let config = DexConfig::from_toml("").unwrap();
        assert_eq!(config.api_base_url, "https://pokeapi.co/api/v2");
        assert_eq!(config.max_retries, 3);
        assert_eq!(config.log_level, "info");
        assert!(config.color);
    }

    #[test]
    fn test_partial_override() {
        let config = DexConfig::from_toml(
            r#"
            api_base_url = "http://127.0.0.1:8080/api/v2/"
            max_retries = 1
            color = false
            "#,
        )
        .unwrap();
        assert_eq!(config.max_retries, 1);
        assert!(!config.color);
        assert_eq!(config.request_timeout_secs, 30);
        assert_eq!(
            config.pokemon_url("garchomp"),
            "http://127.0.0.1:8080/api/v2/pokemon/garchomp"
        );
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        assert!(DexConfig::from_toml("max_retries = \"three\"").is_err());
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let path = std::env::temp_dir().join("draftdex_missing_config.toml");
        let _ = std::fs::remove_file(&path);
        let config = DexConfig::load_or_default(&path).unwrap();
        assert_eq!(config.log_dir, "logs");
    }
}
