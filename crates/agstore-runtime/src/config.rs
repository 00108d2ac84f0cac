use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const CONFIG_FILE: &str = "config.toml";
pub const CATALOG_FILE: &str = "catalog.json";

/// Resolve the workspace data directory path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. AGSTORE_PATH environment variable (with tilde expansion)
/// 3. XDG data directory (recommended default)
/// 4. ~/.agstore (fallback for systems without XDG)
pub fn resolve_workspace_path(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("AGSTORE_PATH") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("agstore"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".agstore"));
    }

    Err(Error::Config(
        "Could not determine workspace path: no HOME directory or XDG data directory found"
            .to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Locale name used for grouping run counts (e.g. "en", "de").
    pub locale: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            locale: "en".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    pub transition_ms: u64,
    pub visible_cards: usize,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            transition_ms: 500,
            visible_cards: 3,
        }
    }
}

impl CarouselConfig {
    pub fn transition(&self) -> Duration {
        Duration::from_millis(self.transition_ms)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log destination for the interactive browser, which cannot share the terminal.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub display: DisplayConfig,
    pub carousel: CarouselConfig,
    pub catalog: CatalogConfig,
    pub logging: LoggingConfig,
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn path_in(data_dir: &Path) -> PathBuf {
        data_dir.join(CONFIG_FILE)
    }

    /// Catalog location: the configured path, or `catalog.json` in the data dir.
    pub fn catalog_path(&self, data_dir: &Path) -> PathBuf {
        self.catalog
            .path
            .clone()
            .unwrap_or_else(|| data_dir.join(CATALOG_FILE))
    }

    pub fn validate(&self) -> Result<()> {
        if self.carousel.visible_cards == 0 {
            return Err(Error::Config(
                "carousel.visible_cards must be at least 1".to_string(),
            ));
        }
        if self.display.locale.trim().is_empty() {
            return Err(Error::Config("display.locale must not be empty".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.display.locale, "en");
        assert_eq!(config.carousel.transition(), Duration::from_millis(500));
        assert_eq!(config.carousel.visible_cards, 3);
        assert_eq!(config.catalog.path, None);
    }

    #[test]
    fn test_config_save_and_load() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");

        let mut config = Config::default();
        config.display.locale = "de".to_string();
        config.carousel.visible_cards = 2;
        config.logging.file = Some(PathBuf::from("/tmp/agstore.log"));

        config.save_to(&config_path)?;
        assert!(config_path.exists());

        let loaded = Config::load_from(&config_path)?;
        assert_eq!(loaded, config);

        Ok(())
    }

    #[test]
    fn test_partial_file_fills_defaults() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "[carousel]\ntransition_ms = 250\n")?;

        let config = Config::load_from(&config_path)?;
        assert_eq!(config.carousel.transition_ms, 250);
        assert_eq!(config.carousel.visible_cards, 3);
        assert_eq!(config.display.locale, "en");

        Ok(())
    }

    #[test]
    fn test_zero_visible_cards_is_rejected() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "[carousel]\nvisible_cards = 0\n")?;

        let err = Config::load_from(&config_path).unwrap_err();
        assert!(matches!(err, Error::Config(_)));

        Ok(())
    }

    #[test]
    fn test_load_nonexistent_returns_default() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("nonexistent.toml");

        let config = Config::load_from(&config_path)?;
        assert_eq!(config, Config::default());

        Ok(())
    }

    #[test]
    fn test_catalog_path_prefers_configured() {
        let data_dir = Path::new("/data");
        let mut config = Config::default();
        assert_eq!(config.catalog_path(data_dir), data_dir.join("catalog.json"));

        config.catalog.path = Some(PathBuf::from("/elsewhere/store.json"));
        assert_eq!(
            config.catalog_path(data_dir),
            PathBuf::from("/elsewhere/store.json")
        );
    }

    #[test]
    fn test_explicit_workspace_path_wins() -> Result<()> {
        let path = resolve_workspace_path(Some("/explicit/dir"))?;
        assert_eq!(path, PathBuf::from("/explicit/dir"));
        Ok(())
    }
}
