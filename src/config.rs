use std::path::Path;

use crate::ai::{Opponent, DEFAULT_DEPTH};
use crate::error::ConfigError;
use crate::game::{GridShape, Player};

/// Deepest search the config accepts. Cost grows as columns^(depth + 1).
pub const MAX_DEPTH: usize = 8;

/// Board and turn order.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub grid: GridShape,
    pub human_starts: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            grid: GridShape::Standard,
            human_starts: true,
        }
    }
}

impl GameConfig {
    pub fn first_player(&self) -> Player {
        if self.human_starts {
            Player::Human
        } else {
            Player::Ai
        }
    }
}

/// Computer opponent settings.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AiConfig {
    pub opponent: Opponent,
    /// Plies searched below each candidate move.
    pub depth: usize,
    /// Fixes the random opponent's choices; unset means a fresh seed per run.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for AiConfig {
    fn default() -> Self {
        AiConfig {
            opponent: Opponent::Minimax,
            depth: DEFAULT_DEPTH,
            seed: None,
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub game: GameConfig,
    pub ai: AiConfig,
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
            log::warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ai.depth > MAX_DEPTH {
            return Err(ConfigError::Validation(format!(
                "ai.depth must be <= {MAX_DEPTH}"
            )));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
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
        assert_eq!(config.game.grid, GridShape::Standard);
        assert_eq!(config.game.first_player(), Player::Human);
        assert_eq!(config.ai.opponent, Opponent::Minimax);
        assert_eq!(config.ai.depth, 4);
        assert_eq!(config.ai.seed, None);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
[game]
grid = "small"
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.game.grid, GridShape::Small);
        // Other fields should be defaults
        assert!(config.game.human_starts);
        assert_eq!(config.ai.depth, DEFAULT_DEPTH);
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.game.grid, GridShape::Standard);
        assert_eq!(config.ai.opponent, Opponent::Minimax);
    }

    #[test]
    fn test_unknown_grid_rejected() {
        let result: Result<AppConfig, _> = toml::from_str("[game]\ngrid = \"huge\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_ai_first() {
        let config: AppConfig = toml::from_str("[game]\nhuman_starts = false\n").unwrap();
        assert_eq!(config.game.first_player(), Player::Ai);
    }

    #[test]
    fn test_validation_rejects_deep_search() {
        let mut config = AppConfig::default();
        config.ai.depth = MAX_DEPTH + 1;
        assert!(config.validate().is_err());
        config.ai.depth = 0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = AppConfig::load_or_default(Path::new("nonexistent_config.toml")).unwrap();
        assert_eq!(config.ai.depth, DEFAULT_DEPTH);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test_config.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
[ai]
opponent = "random"
depth = 2
seed = 17
"#
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.ai.opponent, Opponent::Random);
        assert_eq!(config.ai.depth, 2);
        assert_eq!(config.ai.seed, Some(17));
        // Others are defaults
        assert_eq!(config.game.grid, GridShape::Standard);
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deep.toml");
        std::fs::write(&path, "[ai]\ndepth = 20\n").unwrap();
        assert!(matches!(
            AppConfig::load(&path),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = AppConfig::default_toml();
        let config: AppConfig = toml::from_str(&toml_str).unwrap();
        config.validate().expect("roundtripped config should be valid");
        assert!(toml_str.contains("grid = \"standard\""));
    }
}
