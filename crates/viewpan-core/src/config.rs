use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::log::LogConfig;
use crate::pan::ChromeConfig;

/// Top-level configuration for viewpan.
///
/// Loaded from `~/.config/viewpan/config.toml`. Missing sections fall
/// back to defaults thanks to `#[serde(default)]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Obstruction chrome dimensions.
    pub chrome: ChromeConfig,
    /// File logging settings.
    pub log: LogConfig,
}

impl Config {
    /// Clamps configured values to safe ranges.
    ///
    /// Negative chrome dimensions are raised to 0. This sanitizes the
    /// configuration only; the calculator itself never clamps.
    pub fn validate(&mut self) {
        self.chrome.bar_height = self.chrome.bar_height.max(0.0);
        self.chrome.panel_width = self.chrome.panel_width.max(0.0);
    }
}

/// Returns the config directory: `~/.config/viewpan/`.
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".config").join("viewpan"))
}

/// Returns the config file path: `~/.config/viewpan/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Tries to load and parse `config.toml`.
///
/// Returns `Ok(Config)` on success, or an error string describing
/// what went wrong (IO error, parse error, etc.).
pub fn try_load() -> Result<Config, String> {
    let path = config_path().ok_or("could not determine config path")?;
    let content = std::fs::read_to_string(&path).map_err(|e| format!("{}: {e}", path.display()))?;
    let mut config: Config =
        toml::from_str(&content).map_err(|e| format!("{}: {e}", path.display()))?;
    config.validate();
    Ok(config)
}

/// Loads the configuration from disk, falling back to defaults.
///
/// If the file doesn't exist, returns defaults silently.
/// If the file exists but can't be parsed, prints a warning and
/// returns defaults.
pub fn load() -> Config {
    let Some(path) = config_path() else {
        return Config::default();
    };
    if !path.exists() {
        return Config::default();
    }

    match try_load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: failed to load config: {e}");
            Config::default()
        }
    }
}

/// Generates the default `config.toml` with comments explaining every
/// option. Written by `viewpan init`.
pub fn generate_config() -> String {
    r#"# viewpan configuration
# Location: ~/.config/viewpan/config.toml
# Missing sections and fields fall back to the defaults shown here.

[chrome]
# Height in pixels of the bar band at the bottom of the stage.
bar_height = 100.0
# Width in pixels of the side panel band when the panel is open.
panel_width = 350.0

[log]
# Whether file logging is enabled.
enabled = false
# Minimum log level: "debug", "info", "warn", or "error".
level = "info"
# Maximum log file size in megabytes before rotation.
max_file_mb = 10
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_chrome_is_100_by_350() {
        // Arrange / Act
        let config = Config::default();

        // Assert
        assert_eq!(config.chrome.bar_height, 100.0);
        assert_eq!(config.chrome.panel_width, 350.0);
        assert!(!config.log.enabled);
    }

    #[test]
    fn partial_toml_uses_defaults_for_missing_fields() {
        // Arrange
        let toml_str = "[chrome]\nbar_height = 64.0\n";

        // Act
        let config: Config = toml::from_str(toml_str).unwrap();

        // Assert
        assert_eq!(config.chrome.bar_height, 64.0);
        assert_eq!(config.chrome.panel_width, 350.0); // default
        assert_eq!(config.log.level, "info"); // default
    }

    #[test]
    fn config_roundtrips_through_toml() {
        // Arrange
        let config = Config::default();

        // Act
        let serialized = toml::to_string(&config).unwrap();
        let deserialized: Config = toml::from_str(&serialized).unwrap();

        // Assert
        assert_eq!(deserialized.chrome.bar_height, config.chrome.bar_height);
        assert_eq!(deserialized.chrome.panel_width, config.chrome.panel_width);
        assert_eq!(deserialized.log.enabled, config.log.enabled);
    }

    #[test]
    fn validate_clamps_negative_chrome() {
        // Arrange
        let mut config = Config {
            chrome: ChromeConfig {
                bar_height: -40.0,
                panel_width: -1.0,
            },
            ..Default::default()
        };

        // Act
        config.validate();

        // Assert
        assert_eq!(config.chrome.bar_height, 0.0);
        assert_eq!(config.chrome.panel_width, 0.0);
    }

    #[test]
    fn generated_template_parses_to_defaults() {
        // Act
        let config: Config = toml::from_str(&generate_config()).unwrap();

        // Assert
        assert_eq!(config.chrome.bar_height, 100.0);
        assert_eq!(config.chrome.panel_width, 350.0);
        assert!(!config.log.enabled);
        assert_eq!(config.log.level, "info");
        assert_eq!(config.log.max_file_mb, 10);
    }
}
