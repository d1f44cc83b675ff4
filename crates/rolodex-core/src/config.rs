use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::autocomplete::TriggerMode;
use crate::error::{Result, RolodexError};
use crate::filter::FilterOptions;

/// Local mock API serving a bare JSON array of people.
pub const LOCAL_PEOPLE_URL: &str = "http://localhost:3000/api/v1/people";
/// Public random-user API, `{ "results": [...] }` shape.
pub const REMOTE_PEOPLE_URL: &str = "https://randomuser.me/api/?inc=picture,name&results=200";

/// Root application configuration, loaded from `~/.config/rolodex/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub source: SourceConfig,
    pub widget: WidgetConfig,
    pub ui: UiConfig,
}

/// Where the people pool comes from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DataSourceKind {
    Local,
    #[default]
    Remote,
    File,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    pub kind: DataSourceKind,
    /// Empty means the default endpoint for `kind`.
    pub url: String,
    /// JSON file path used when `kind = "file"`.
    pub file: String,
    /// 0 disables the request timeout.
    pub timeout_secs: u64,
    pub user_agent: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    pub trigger: TriggerMode,
    pub case_sensitive: bool,
    pub placeholder: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub max_visible_rows: u16,
    pub show_avatars: bool,
    pub tick_ms: u64,
}

// ─── Defaults ──────────────────────────────────────────────

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            kind: DataSourceKind::Remote,
            url: String::new(),
            file: String::new(),
            timeout_secs: 0,
            user_agent: "rolodex/0.1".to_string(),
        }
    }
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            trigger: TriggerMode::TypeToOpen,
            case_sensitive: false,
            placeholder: "Search for a person".to_string(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            max_visible_rows: 8,
            show_avatars: true,
            tick_ms: 250,
        }
    }
}

impl SourceConfig {
    /// Configured URL, or the default endpoint for the source kind.
    pub fn endpoint(&self) -> &str {
        if !self.url.is_empty() {
            return &self.url;
        }
        match self.kind {
            DataSourceKind::Local => LOCAL_PEOPLE_URL,
            DataSourceKind::Remote | DataSourceKind::File => REMOTE_PEOPLE_URL,
        }
    }
}

impl WidgetConfig {
    pub fn filter_options(&self) -> FilterOptions {
        FilterOptions {
            case_sensitive: self.case_sensitive,
        }
    }
}

// ─── Load / Save ───────────────────────────────────────────

impl AppConfig {
    /// Standard config file path: `~/.config/rolodex/config.toml`
    pub fn config_path() -> PathBuf {
        if let Ok(path) = std::env::var("ROLODEX_CONFIG") {
            return PathBuf::from(path);
        }

        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("~/.config"))
            .join("rolodex")
            .join("config.toml")
    }

    /// Load config from disk, falling back to defaults if file doesn't exist.
    pub fn load() -> Result<Self> {
        let path = Self::config_path();
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path();
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        if self.source.kind == DataSourceKind::File && self.source.file.is_empty() {
            return Err(RolodexError::ConfigError(
                "source.kind = \"file\" requires source.file".to_string(),
            ));
        }
        if self.ui.max_visible_rows == 0 {
            return Err(RolodexError::ConfigError(
                "ui.max_visible_rows must be at least 1".to_string(),
            ));
        }
        if self.ui.tick_ms == 0 {
            return Err(RolodexError::ConfigError(
                "ui.tick_ms must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Directory for the interactive session's log file.
    pub fn log_dir() -> PathBuf {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("/tmp"))
            .join("rolodex")
            .join("logs")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config_is_valid() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.source.kind, DataSourceKind::Remote);
        assert_eq!(cfg.widget.trigger, TriggerMode::TypeToOpen);
        assert!(!cfg.widget.case_sensitive);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_config_toml_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        let mut cfg = AppConfig::default();
        cfg.widget.trigger = TriggerMode::ButtonToggle;
        cfg.source.kind = DataSourceKind::Local;
        cfg.save_to(&path).unwrap();

        let loaded = AppConfig::load_from(&path).unwrap();
        assert_eq!(loaded.widget.trigger, TriggerMode::ButtonToggle);
        assert_eq!(loaded.source.kind, DataSourceKind::Local);
        assert_eq!(loaded.ui.max_visible_rows, cfg.ui.max_visible_rows);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[widget]\ntrigger = \"button-toggle\"\n").unwrap();

        let cfg = AppConfig::load_from(&path).unwrap();
        assert_eq!(cfg.widget.trigger, TriggerMode::ButtonToggle);
        assert_eq!(cfg.widget.placeholder, "Search for a person");
        assert_eq!(cfg.source.kind, DataSourceKind::Remote);
    }

    #[test]
    fn test_load_nonexistent_returns_default() {
        let cfg = AppConfig::load_from(Path::new("/tmp/nonexistent_rolodex_config.toml")).unwrap();
        assert_eq!(cfg.ui.tick_ms, 250);
    }

    #[test]
    fn test_file_source_without_path_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[source]\nkind = \"file\"\n").unwrap();
        assert!(matches!(
            AppConfig::load_from(&path),
            Err(RolodexError::ConfigError(_))
        ));
    }

    #[test]
    fn test_endpoint_defaults_per_kind() {
        let mut src = SourceConfig::default();
        assert_eq!(src.endpoint(), REMOTE_PEOPLE_URL);
        src.kind = DataSourceKind::Local;
        assert_eq!(src.endpoint(), LOCAL_PEOPLE_URL);
        src.url = "http://example.test/people".to_string();
        assert_eq!(src.endpoint(), "http://example.test/people");
    }

    #[test]
    fn test_zero_sizes_are_rejected() {
        let mut cfg = AppConfig::default();
        cfg.ui.tick_ms = 0;
        assert!(matches!(cfg.validate(), Err(RolodexError::ConfigError(_))));

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[ui]\nmax_visible_rows = 0\n").unwrap();
        assert!(matches!(
            AppConfig::load_from(&path),
            Err(RolodexError::ConfigError(_))
        ));
    }
}
