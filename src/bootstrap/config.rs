//! # Configuration Loader
//!
//! Reads the TOML config file and maps it onto [`AppConfig`]. Missing
//! sections and keys fall back to the defaults baked into the config
//! DTO; nothing here validates values.

use anyhow::Context;
use std::path::PathBuf;

use sb_core::board::PlacementMode;
use sb_core::config::AppConfig;

/// Load configuration from a TOML file.
///
/// # Errors
///
/// Returns error if the file cannot be read, is not valid TOML, or a
/// value has the wrong type (including an unknown placement mode).
pub fn load_config(config_path: PathBuf) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    AppConfig::from_toml(&toml_value)
        .with_context(|| format!("Invalid config in {}", config_path.display()))
}

/// `<config dir>/stampboard/config.toml`, e.g. `~/.config/stampboard/config.toml`.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("stampboard").join("config.toml"))
}

/// Command-line values that win over the config file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub placement: Option<PlacementMode>,
    pub timezone: Option<String>,
}

impl ConfigOverrides {
    pub fn apply(self, config: &mut AppConfig) {
        if let Some(placement) = self.placement {
            config.board.placement = placement;
        }
        if let Some(timezone) = self.timezone {
            config.display.timezone = Some(timezone);
        }
    }
}

/// Load the effective configuration.
///
/// An explicit path must exist. Without one the default path is tried,
/// and built-in defaults are used when no file is there.
pub fn resolve_config(
    explicit: Option<PathBuf>,
    overrides: ConfigOverrides,
) -> anyhow::Result<AppConfig> {
    let mut config = match explicit {
        Some(path) => load_config(path)?,
        None => match default_config_path() {
            Some(path) if path.is_file() => load_config(path)?,
            _ => AppConfig::default(),
        },
    };
    overrides.apply(&mut config);
    Ok(config)
}
