use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::info;

// Import FetchConfig from carbot_scrape to avoid duplication
use carbot_scrape::FetchConfig;

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub scrape: ScrapeConfig,
    #[serde(default)]
    pub fetch: FetchConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ScrapeConfig {
    /// Title of the page to scrape at startup.
    #[serde(default = "ScrapeConfig::default_page_title")]
    pub page_title: String,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            page_title: Self::default_page_title(),
        }
    }
}

impl ScrapeConfig {
    fn default_page_title() -> String {
        "List of Lamborghini automobiles".to_string()
    }
}

impl Config {
    /// Load `~/carbot/config.json`, or fall back to defaults when the
    /// file does not exist. The tool must run with zero configuration;
    /// only an unreadable or invalid existing file is an error.
    pub fn load_or_default() -> anyhow::Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            info!("No config at {}, using defaults", config_path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&config_path)?;
        let config: Self = serde_json::from_str(&content)?;

        info!("Loaded config from {}", config_path.display());
        Ok(config)
    }

    pub fn config_path() -> anyhow::Result<PathBuf> {
        let home = dirs::home_dir().ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?;
        Ok(home.join("carbot").join("config.json"))
    }

    pub fn ensure_config_dir() -> anyhow::Result<PathBuf> {
        let config_dir = dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?
            .join("carbot");

        std::fs::create_dir_all(&config_dir)?;
        Ok(config_dir)
    }

    pub fn create_config() -> anyhow::Result<()> {
        let config_dir = Self::ensure_config_dir()?;
        let config_path = config_dir.join("config.json");

        if config_path.exists() {
            anyhow::bail!(
                "Config file already exists at: {}. Please edit it directly.",
                config_path.display()
            );
        }

        let config_template = r#"{
  "scrape": {
    "page_title": "List of Lamborghini automobiles"
  },
  "fetch": {
    "endpoint": "https://en.wikipedia.org/w/api.php",
    "timeout": 15,
    "user_agent": "Mozilla/5.0 (compatible; carbot/0.1)",
    "max_size": 8000000
  }
}
"#;

        std::fs::write(&config_path, config_template)?;
        println!("Created config file at: {}", config_path.display());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.scrape.page_title, "List of Lamborghini automobiles");
        assert!(config.fetch.endpoint.contains("en.wikipedia.org"));
    }

    #[test]
    fn test_partial_config_deserializes_with_defaults() {
        let raw = r#"{"scrape": {"page_title": "List of Ferrari road cars"}}"#;
        let config: Config = match serde_json::from_str(raw) {
            Ok(c) => c,
            Err(e) => panic!("deserialize failed: {e}"),
        };
        assert_eq!(config.scrape.page_title, "List of Ferrari road cars");
        assert_eq!(config.fetch.timeout, 15);
    }

    #[test]
    fn test_template_is_valid_config_json() {
        // Keep the `init` template parseable by `load_or_default`.
        let template = r#"{
  "scrape": { "page_title": "List of Lamborghini automobiles" },
  "fetch": {
    "endpoint": "https://en.wikipedia.org/w/api.php",
    "timeout": 15,
    "user_agent": "Mozilla/5.0 (compatible; carbot/0.1)",
    "max_size": 8000000
  }
}"#;
        assert!(serde_json::from_str::<Config>(template).is_ok());
    }
}
