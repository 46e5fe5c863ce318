use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// JSON file holding saved alignment sessions
    pub sessions_path: PathBuf,
    /// Show English in the first column
    pub en_first: bool,
    /// Maximum number of undo snapshots
    pub history_limit: usize,
    /// Record one undo snapshot per run of typing in a cell instead of one per change
    pub coalesce_text_edits: bool,
    /// Where the terminal UI writes its log
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sessions_path: Self::default_sessions_path(),
            en_first: true,
            history_limit: 20,
            coalesce_text_edits: true,
            log_path: None,
        }
    }
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables and tilde in the loaded paths
        config.sessions_path =
            Self::expand_path(&config.sessions_path).unwrap_or(config.sessions_path);
        config.log_path = config
            .log_path
            .map(|path| Self::expand_path(&path).unwrap_or(path));

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    /// The config file if present, otherwise defaults
    pub fn load_or_default() -> Result<Self, ConfigError> {
        Ok(Self::load()?.unwrap_or_default())
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/bitext-align");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    pub fn default_sessions_path() -> PathBuf {
        let data_dir = shellexpand::tilde("~/.local/share/bitext-align");
        PathBuf::from(data_dir.as_ref()).join("sessions.json")
    }

    /// Log file location, next to the sessions file unless configured
    pub fn resolved_log_path(&self) -> PathBuf {
        self.log_path.clone().unwrap_or_else(|| {
            self.sessions_path
                .parent()
                .map(|dir| dir.join("bitext-align.log"))
                .unwrap_or_else(|| PathBuf::from("bitext-align.log"))
        })
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_config_path() {
        let config_path = Config::config_path();
        let path_str = config_path.to_string_lossy();

        // Should not contain tilde anymore
        assert!(!path_str.starts_with('~'));
        assert!(path_str.ends_with(".config/bitext-align/config.toml"));
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();

        assert!(config.en_first);
        assert_eq!(config.history_limit, 20);
        assert!(config.coalesce_text_edits);
        assert!(
            config
                .sessions_path
                .to_string_lossy()
                .ends_with("bitext-align/sessions.json")
        );
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let config: Config = toml::from_str("en_first = false\nhistory_limit = 5\n").unwrap();

        assert!(!config.en_first);
        assert_eq!(config.history_limit, 5);
        assert!(config.coalesce_text_edits);
    }

    #[test]
    fn test_config_serialization_roundtrip() {
        let original = Config {
            sessions_path: PathBuf::from("/tmp/sessions.json"),
            en_first: false,
            history_limit: 10,
            coalesce_text_edits: false,
            log_path: Some(PathBuf::from("/tmp/align.log")),
        };

        let toml_str = toml::to_string(&original).unwrap();
        let deserialized: Config = toml::from_str(&toml_str).unwrap();

        assert_eq!(original, deserialized);
    }

    #[test]
    fn test_expand_path_with_tilde() {
        let path = PathBuf::from("~/test/path");
        let expanded = Config::expand_path(&path);

        assert!(expanded.is_some());
        let expanded = expanded.unwrap();
        assert!(!expanded.to_string_lossy().starts_with('~'));
        assert!(expanded.to_string_lossy().contains("test/path"));
    }

    #[test]
    fn test_expand_path_with_absolute_path() {
        let path = PathBuf::from("/absolute/path");
        let expanded = Config::expand_path(&path).unwrap();

        assert_eq!(expanded, path);
    }

    #[test]
    fn test_load_config_file_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let non_existent_config = temp_dir.path().join("nonexistent.toml");

        let result = Config::load_from_path(&non_existent_config).unwrap();

        assert!(result.is_none());
    }

    #[test]
    fn test_invalid_config_is_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "history_limit = \"lots\"").unwrap();

        let result = Config::load_from_path(&config_file);

        assert!(matches!(
            result,
            Err(ConfigError::ConfigParseError { .. })
        ));
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("nested/config.toml");
        let test_config = Config {
            sessions_path: PathBuf::from("/tmp/test-sessions.json"),
            ..Config::default()
        };

        test_config.save_to_path(&config_file).unwrap();
        let loaded_config = Config::load_from_path(&config_file).unwrap().unwrap();

        assert_eq!(loaded_config, test_config);
    }

    #[test]
    fn test_config_with_env_var_in_toml() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        unsafe {
            env::set_var("BITEXT_ALIGN_DATA", "/custom/data");
        }
        std::fs::write(
            &config_file,
            "sessions_path = \"$BITEXT_ALIGN_DATA/sessions.json\"\n",
        )
        .unwrap();

        let config = Config::load_from_path(&config_file).unwrap().unwrap();

        assert_eq!(
            config.sessions_path,
            PathBuf::from("/custom/data/sessions.json")
        );

        unsafe {
            env::remove_var("BITEXT_ALIGN_DATA");
        }
    }

    #[test]
    fn test_resolved_log_path_defaults_next_to_sessions() {
        let config = Config {
            sessions_path: PathBuf::from("/data/sessions.json"),
            ..Config::default()
        };
        assert_eq!(
            config.resolved_log_path(),
            PathBuf::from("/data/bitext-align.log")
        );
    }
}
