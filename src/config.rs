use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, YamlBumpError};
use crate::version::IncrementKind;

/// File name looked up in the current directory.
pub const LOCAL_CONFIG_FILE: &str = "yamlbump.toml";

/// File name looked up in the user config directory.
pub const USER_CONFIG_FILE: &str = ".yamlbump.toml";

/// Represents the complete configuration for yaml-bump.
///
/// Every value here is a default that command-line flags override.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub bump: BumpConfig,

    #[serde(default)]
    pub behavior: BehaviorConfig,
}

/// Defaults for the bump itself.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct BumpConfig {
    #[serde(default)]
    pub inc_type: IncrementKind,
}

/// Controls runtime behavior without affecting how versions are bumped.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct BehaviorConfig {
    /// Report changes without writing the file back
    #[serde(default)]
    pub dry_run: bool,
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `yamlbump.toml` in current directory
/// 3. `.yamlbump.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If a file exists (or was named explicitly) but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let path = match config_path {
        Some(path) => PathBuf::from(path),
        None => match discover_config() {
            Some(path) => path,
            None => return Ok(Config::default()),
        },
    };

    let config_str = fs::read_to_string(&path).map_err(|e| {
        YamlBumpError::config(format!("cannot read {}: {}", path.display(), e))
    })?;
    parse_config(&config_str)
}

/// Parses a TOML configuration document.
pub fn parse_config(content: &str) -> Result<Config> {
    toml::from_str(content).map_err(|e| YamlBumpError::config(e.to_string()))
}

fn discover_config() -> Option<PathBuf> {
    let local = Path::new(".").join(LOCAL_CONFIG_FILE);
    if local.exists() {
        return Some(local);
    }

    dirs::config_dir()
        .map(|dir| dir.join(USER_CONFIG_FILE))
        .filter(|path| path.exists())
}
