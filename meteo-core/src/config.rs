use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// default_zip = 8000
/// base_url = "https://app-prod-ws.meteoswiss-app.ch/v1"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Postal code used when a command is invoked without `--zip`.
    pub default_zip: Option<u32>,

    /// Backend base URL override; the production URL is used when unset.
    pub base_url: Option<String>,
}

impl Config {
    /// Return the stored default postal code, with a hint when none is set.
    pub fn default_zip(&self) -> Result<u32> {
        self.default_zip.ok_or_else(|| {
            anyhow!(
                "No postal code given and no default configured.\n\
                 Hint: pass --zip, or run `meteocli configure --zip <plz>` to store a default."
            )
        })
    }

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
        let dirs = ProjectDirs::from("ch", "meteocli", "meteocli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_zip_errors_when_not_set() {
        let cfg = Config::default();
        let err = cfg.default_zip().unwrap_err();

        assert!(err.to_string().contains("Hint: pass --zip"));
    }

    #[test]
    fn default_zip_returns_stored_value() {
        let cfg = Config { default_zip: Some(8000), base_url: None };
        assert_eq!(cfg.default_zip().unwrap(), 8000);
    }

    #[test]
    fn toml_round_trip() {
        let cfg = Config {
            default_zip: Some(3012),
            base_url: Some("http://localhost:8080/v1".into()),
        };

        let text = toml::to_string_pretty(&cfg).unwrap();
        let back: Config = toml::from_str(&text).unwrap();

        assert_eq!(back.default_zip, Some(3012));
        assert_eq!(back.base_url.as_deref(), Some("http://localhost:8080/v1"));
    }

    #[test]
    fn empty_toml_is_all_defaults() {
        let cfg: Config = toml::from_str("").unwrap();
        assert!(cfg.default_zip.is_none());
        assert!(cfg.base_url.is_none());
    }
}
