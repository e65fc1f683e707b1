//! Configuration management for cursorshot

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Display configuration
    #[serde(default)]
    pub display: DisplayConfig,

    /// Channel configuration
    #[serde(default)]
    pub channel: ChannelConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DisplayConfig {
    /// X11 display to connect to (e.g. ":0"); unset uses $DISPLAY
    pub display: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChannelConfig {
    /// Channel name the screenshot handler is bound to
    #[serde(default = "default_channel_name")]
    pub name: String,
}

impl Default for ChannelConfig {
    fn default() -> Self {
        Self {
            name: default_channel_name(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_channel_name() -> String {
    crate::channel::SCREENSHOT_CHANNEL.to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from TOML file
    pub fn load(path: &PathBuf) -> Result<Self, Box<dyn std::error::Error>> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), Box<dyn std::error::Error>> {
        if self.channel.name.trim().is_empty() {
            return Err("Channel name must not be empty".into());
        }

        if let Some(display) = &self.display.display {
            if display.is_empty() {
                return Err("Display must not be empty when set".into());
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Config;

    #[test]
    fn defaults_are_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.channel.name, "com.cursorshot/screenshot");
        assert_eq!(config.logging.level, "info");
        assert!(config.display.display.is_none());
    }

    #[test]
    fn parses_partial_toml() {
        let config: Config = toml::from_str(
            r#"
            [display]
            display = ":1"
            "#,
        )
        .expect("parse");
        assert_eq!(config.display.display.as_deref(), Some(":1"));
        assert_eq!(config.channel.name, "com.cursorshot/screenshot");
    }

    #[test]
    fn parses_full_toml() {
        let config: Config = toml::from_str(
            r#"
            [display]
            display = ":0"

            [channel]
            name = "com.example/screenshot"

            [logging]
            level = "debug"
            "#,
        )
        .expect("parse");
        assert_eq!(config.channel.name, "com.example/screenshot");
        assert_eq!(config.logging.level, "debug");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_empty_channel_name() {
        let mut config = Config::default();
        config.channel.name = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_empty_display_when_set() {
        let mut config = Config::default();
        config.display.display = Some(String::new());
        assert!(config.validate().is_err());
    }
}
