use anyhow::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_host")]
    pub host: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_false")]
    pub open_browser: bool,
}

// Default value functions
fn default_port() -> u16 {
    8080
}
fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_false() -> bool {
    false
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                port: default_port(),
                host: default_host(),
            },
            ui: UiConfig {
                open_browser: default_false(),
            },
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        let mut builder = config::Config::builder()
            .add_source(config::File::with_name("urlqr.toml").required(false))
            .add_source(config::Environment::with_prefix("URLQR"));

        // Override with individual environment variables
        if let Ok(port) = std::env::var("PORT") {
            builder = builder.set_override("server.port", port)?;
        }
        if let Ok(host) = std::env::var("HOST") {
            builder = builder.set_override("server.host", host)?;
        }

        let settings = builder.build()?;
        let config: AppConfig = settings.try_deserialize()?;
        Ok(config)
    }

    pub fn save_example() -> Result<()> {
        let example_config = AppConfig::default();
        let toml_string = toml::to_string_pretty(&example_config)?;
        std::fs::write("urlqr.example.toml", toml_string)?;
        Ok(())
    }

    pub fn from_toml(toml_content: &str) -> Result<Self> {
        let config: AppConfig = toml::from_str(toml_content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "0.0.0.0");
        assert!(!config.ui.open_browser);
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let toml_string = toml::to_string_pretty(&config).unwrap();

        assert!(toml_string.contains("[server]"));
        assert!(toml_string.contains("port = 8080"));
        assert!(toml_string.contains("host = \"0.0.0.0\""));
        assert!(toml_string.contains("[ui]"));
        assert!(toml_string.contains("open_browser = false"));
    }

    #[test]
    fn test_config_deserialization() {
        let toml_content = r#"
            [server]
            port = 9090
            host = "127.0.0.1"

            [ui]
            open_browser = true
        "#;

        let config = AppConfig::from_toml(toml_content).unwrap();

        assert_eq!(config.server.port, 9090);
        assert_eq!(config.server.host, "127.0.0.1");
        assert!(config.ui.open_browser);
    }

    #[test]
    fn test_partial_config() {
        let toml_content = r#"
            [server]
            port = 3000

            [ui]
        "#;

        let config = AppConfig::from_toml(toml_content).unwrap();

        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.host, "0.0.0.0"); // Default value
        assert!(!config.ui.open_browser); // Default value
    }

    #[test]
    fn test_save_example_config() {
        let temp_dir = TempDir::new().unwrap();
        let original_dir = env::current_dir().unwrap();

        env::set_current_dir(&temp_dir).unwrap();

        AppConfig::save_example().unwrap();

        let content = std::fs::read_to_string("urlqr.example.toml").unwrap();
        assert!(content.contains("[server]"));
        assert!(content.contains("port = 8080"));

        env::set_current_dir(original_dir).unwrap();
    }

    #[test]
    fn test_invalid_toml() {
        let invalid_toml = "invalid toml content [[[";
        let result = AppConfig::from_toml(invalid_toml);
        assert!(result.is_err());
    }
}
