use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{env, fs, path::PathBuf};

/// Environment variable consulted before the config file.
pub const API_KEY_ENV: &str = "OPENWEATHER_API_KEY";

/// Used when no key is configured anywhere. Upstream rejects it with a 401,
/// which surfaces through the normal error path rather than a separate
/// config-error path.
pub const PLACEHOLDER_API_KEY: &str = "demo-key";

/// Top-level configuration stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// OpenWeather API key, if one has been saved via `skycast configure`.
    pub api_key: Option<String>,
}

impl Config {
    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "skycast", "skycast")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Resolve the API key: environment variable first, then the saved
    /// config value, then the placeholder.
    pub fn resolve_api_key(&self) -> String {
        let from_env = env::var(API_KEY_ENV).ok().filter(|k| !k.is_empty());
        self.resolve_api_key_with(from_env)
    }

    fn resolve_api_key_with(&self, env_value: Option<String>) -> String {
        env_value
            .or_else(|| self.api_key.clone())
            .unwrap_or_else(|| PLACEHOLDER_API_KEY.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_value_wins_over_saved_key() {
        let cfg = Config {
            api_key: Some("saved-key".to_string()),
        };

        let key = cfg.resolve_api_key_with(Some("env-key".to_string()));
        assert_eq!(key, "env-key");
    }

    #[test]
    fn saved_key_is_used_when_env_is_absent() {
        let cfg = Config {
            api_key: Some("saved-key".to_string()),
        };

        assert_eq!(cfg.resolve_api_key_with(None), "saved-key");
    }

    #[test]
    fn placeholder_is_used_when_nothing_is_configured() {
        let cfg = Config::default();
        assert_eq!(cfg.resolve_api_key_with(None), PLACEHOLDER_API_KEY);
    }

    #[test]
    fn config_round_trips_through_toml() {
        let cfg = Config {
            api_key: Some("KEY".to_string()),
        };

        let text = toml::to_string_pretty(&cfg).expect("serialize must succeed");
        let back: Config = toml::from_str(&text).expect("parse must succeed");
        assert_eq!(back.api_key.as_deref(), Some("KEY"));
    }
}
