use std::path::Path;

use tracing::warn;

use crate::board::MAX_BOARD_SIZE;
use crate::error::ConfigError;

/// Board sizes offered in the game window
pub const BOARD_SIZES: [usize; 5] = [3, 4, 5, 6, 10];

/// Deepest search accepted from a config file
pub const MAX_SEARCH_DEPTH: u32 = 12;

/// Named depth bounds for the pruned search
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Search depth for this level
    pub fn depth(self) -> u32 {
        match self {
            Difficulty::Easy => 3,
            Difficulty::Medium => 5,
            Difficulty::Hard => 10,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub board_size: usize,
    pub difficulty: Difficulty,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            board_size: 3,
            difficulty: Difficulty::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Overrides the depth implied by the difficulty
    pub depth: Option<u32>,
    /// Alpha-beta cutoffs in the pruned search
    pub pruning: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            depth: None,
            pruning: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Filter used when `RUST_LOG` is not set
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            level: "info".to_string(),
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub game: GameConfig,
    pub search: SearchConfig,
    pub log: LogConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.game.board_size == 0 || self.game.board_size > MAX_BOARD_SIZE {
            return Err(ConfigError::Validation(format!(
                "game.board_size must be in 1..={MAX_BOARD_SIZE}"
            )));
        }
        if let Some(depth) = self.search.depth {
            if depth > MAX_SEARCH_DEPTH {
                return Err(ConfigError::Validation(format!(
                    "search.depth must be <= {MAX_SEARCH_DEPTH}"
                )));
            }
        }
        if self.log.level.trim().is_empty() {
            return Err(ConfigError::Validation("log.level must not be empty".into()));
        }
        Ok(())
    }

    /// Depth bound handed to the engine
    pub fn search_depth(&self) -> u32 {
        self.search.depth.unwrap_or(self.game.difficulty.depth())
    }

    /// TOML string with all default values, for writing a starter config file
    pub fn default_toml() -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(&AppConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        config.validate().expect("default config should be valid");
        assert_eq!(config.game.board_size, 3);
        assert_eq!(config.game.difficulty, Difficulty::Medium);
        assert!(config.search.pruning);
    }

    #[test]
    fn test_difficulty_depths() {
        assert_eq!(Difficulty::Easy.depth(), 3);
        assert_eq!(Difficulty::Medium.depth(), 5);
        assert_eq!(Difficulty::Hard.depth(), 10);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
[game]
difficulty = "hard"
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.game.difficulty, Difficulty::Hard);
        assert_eq!(config.game.board_size, 3);
        assert_eq!(config.search_depth(), 10);
        assert_eq!(config.log.level, "info");
    }

    #[test]
    fn test_depth_override() {
        let toml_str = r#"
[game]
board_size = 10
difficulty = "easy"

[search]
depth = 2
pruning = false
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.search_depth(), 2);
        assert!(!config.search.pruning);
    }

    #[test]
    fn test_unknown_difficulty_rejected() {
        let result: Result<AppConfig, _> = toml::from_str("[game]\ndifficulty = \"nightmare\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_validation_rejects_board_size() {
        let mut config = AppConfig::default();
        config.game.board_size = 0;
        assert!(config.validate().is_err());
        config.game.board_size = 20;
        assert!(config.validate().is_err());
        config.game.board_size = 19;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_deep_search() {
        let mut config = AppConfig::default();
        config.search.depth = Some(13);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_empty_log_level() {
        let mut config = AppConfig::default();
        config.log.level = "  ".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = AppConfig::load_or_default(Path::new("nonexistent_config.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tictactoe.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
[game]
board_size = 6
"#
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.game.board_size, 6);
        assert_eq!(config.game.difficulty, Difficulty::Medium);
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[game]\nboard_size = 42\n").unwrap();
        assert!(matches!(
            AppConfig::load(&path),
            Err(ConfigError::Validation(_))
        ));

        std::fs::write(&path, "[game\n").unwrap();
        assert!(matches!(AppConfig::load(&path), Err(ConfigError::TomlParse(_))));
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = AppConfig::default_toml().unwrap();
        let config: AppConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(config, AppConfig::default());
    }
}
