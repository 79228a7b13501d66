//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`GEOSHELF_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use geoshelf_core::ShapeTemplate;
use serde::{Serialize, Deserialize};
use std::path::Path;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Console session configuration
    #[serde(default)]
    pub repl: ReplConfig,
    /// Inventory configuration
    #[serde(default)]
    pub inventory: InventoryConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`GEOSHELF_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // GEOSHELF_REPL__WELCOME=Hi -> repl.welcome = "Hi"
        figment = figment.merge(Env::prefixed("GEOSHELF_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

/// Console session configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReplConfig {
    /// Printed once when the session starts
    pub welcome: String,
    /// Printed when the user exits from the menu
    pub farewell: String,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            welcome: "Welcome to the Shape Inventory!".to_string(),
            farewell: "Exiting the Shape Inventory. Goodbye!".to_string(),
        }
    }
}

/// Inventory configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InventoryConfig {
    /// Shapes appended to the inventory at start-up, in order
    #[serde(default)]
    pub seed: Vec<ShapeTemplate>,
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace); `RUST_LOG` takes precedence
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert!(config.repl.welcome.contains("Shape Inventory"));
        assert!(config.inventory.seed.is_empty());
        assert_eq!(config.debug.log_level, "warn");
    }

    #[test]
    fn test_config_serialization() {
        let mut config = AppConfig::default();
        config.inventory.seed.push(ShapeTemplate::Circle { radius: 2.0 });
        let toml = toml::to_string(&config).unwrap();
        assert!(toml.contains("welcome"));
        assert!(toml.contains("[[inventory.seed]]"));
        assert!(toml.contains("type = \"Circle\""));
    }

    #[test]
    fn test_config_deserialization_with_seed() {
        let source = r#"
            [repl]
            welcome = "Hello"

            [[inventory.seed]]
            type = "Rectangle"
            length = 5.0
            width = 3.0

            [[inventory.seed]]
            type = "Sphere"
            radius = 2.0
        "#;
        let config: AppConfig = toml::from_str(source).unwrap();
        assert_eq!(config.repl.welcome, "Hello");
        // Missing keys inside a present section fall back to defaults
        assert_eq!(config.repl.farewell, ReplConfig::default().farewell);
        assert_eq!(
            config.inventory.seed,
            vec![
                ShapeTemplate::Rectangle { length: 5.0, width: 3.0 },
                ShapeTemplate::Sphere { radius: 2.0 },
            ]
        );
    }
}
