use std::path::Path;

use crate::error::ConfigError;
use crate::game::MIN_DIMENSION;

/// Checker colors a player can be assigned. Opaque to the game core; the UI
/// maps them to terminal colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceColor {
    Red,
    Black,
    Yellow,
    Blue,
    Green,
    Magenta,
    Cyan,
    White,
}

/// Board dimensions.
#[derive(Debug, Clone, Copy, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub rows: usize,
    pub columns: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig { rows: 6, columns: 7 }
    }
}

/// Checker colors for the two players. They must differ, or the pieces on
/// the board would be indistinguishable.
#[derive(Debug, Clone, Copy, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlayersConfig {
    pub one: PieceColor,
    pub two: PieceColor,
}

impl Default for PlayersConfig {
    fn default() -> Self {
        PlayersConfig {
            one: PieceColor::Red,
            two: PieceColor::Black,
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Copy, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
    pub players: PlayersConfig,
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

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board.rows < MIN_DIMENSION {
            return Err(ConfigError::Validation(format!(
                "board.rows must be >= {MIN_DIMENSION}"
            )));
        }
        if self.board.columns < MIN_DIMENSION {
            return Err(ConfigError::Validation(format!(
                "board.columns must be >= {MIN_DIMENSION}"
            )));
        }
        if self.players.one == self.players.two {
            return Err(ConfigError::Validation(
                "players.one and players.two must be distinct colors".into(),
            ));
        }
        Ok(())
    }
}
