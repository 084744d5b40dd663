//! Game Configuration
//!
//! Settings are read from `assets/config/game.json`. Every field is optional in
//! the file; anything left out takes the built-in default. When the file does
//! not exist at all, the defaults are used as-is.

use crate::error::GameError;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const CONFIG_PATH: &str = "assets/config/game.json";

/// How a collected coin picks its next position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoinPlacement {
    /// x in `[0, width - coin_size]`, y in `[0, height - coin_size]`
    Pixel,
    /// x in `[0, width / coin_size)`, y in `[0, height - coin_size)`.
    /// x is a cell index used as a pixel offset, so the coin stays pinned
    /// near the left edge.
    LegacyCell,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub window_title: String,
    pub window_width: u32,
    pub window_height: u32,
    pub font_path: String,
    pub font_size: u16,
    /// Pixels moved per key press
    pub player_speed: i32,
    pub player_size: u32,
    pub coin_size: u32,
    pub coin_placement: CoinPlacement,
    /// Keep the player inside the window
    pub clamp_player: bool,
    /// Fixed seed for coin placement. `None` seeds from the OS.
    pub rng_seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            window_title: "Coin Collecting".to_string(),
            window_width: 700,
            window_height: 700,
            font_path: "./assets/JetBrainsMono-Bold.ttf".to_string(),
            font_size: 28,
            player_speed: 5,
            player_size: 50,
            coin_size: 50,
            coin_placement: CoinPlacement::Pixel,
            clamp_player: false,
            rng_seed: None,
        }
    }
}

impl GameConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, GameError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self, GameError> {
        let config: GameConfig = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns the defaults
    ///
    /// A file that exists but fails to parse is an error, not a fallback.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, GameError> {
        let path = path.as_ref();
        if !path.exists() {
            log::info!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let config = Self::load_from_file(path).map_err(|e| match e {
            GameError::Config(msg) => GameError::Config(format!("{}: {}", path.display(), msg)),
            other => other,
        })?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    fn validate(&self) -> Result<(), GameError> {
        if self.player_size == 0 || self.coin_size == 0 {
            return Err(GameError::Config(
                "player_size and coin_size must be positive".to_string(),
            ));
        }
        if self.font_size == 0 {
            return Err(GameError::Config("font_size must be positive".to_string()));
        }
        if self.coin_size > self.window_width || self.coin_size > self.window_height {
            return Err(GameError::Config(format!(
                "coin_size {} does not fit a {}x{} window",
                self.coin_size, self.window_width, self.window_height
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();

        assert_eq!(config.window_width, 700);
        assert_eq!(config.window_height, 700);
        assert_eq!(config.font_size, 28);
        assert_eq!(config.player_speed, 5);
        assert_eq!(config.coin_placement, CoinPlacement::Pixel);
        assert!(!config.clamp_player);
        assert_eq!(config.rng_seed, None);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = GameConfig::from_json(
            r#"{ "player_speed": 8, "coin_placement": "legacy_cell", "rng_seed": 42 }"#,
        )
        .unwrap();

        assert_eq!(config.player_speed, 8);
        assert_eq!(config.coin_placement, CoinPlacement::LegacyCell);
        assert_eq!(config.rng_seed, Some(42));
        assert_eq!(config.window_title, "Coin Collecting");
        assert_eq!(config.coin_size, 50);
    }

    #[test]
    fn test_empty_object_is_default() {
        let config = GameConfig::from_json("{}").unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_malformed_json_is_error() {
        let result = GameConfig::from_json(r#"{ "player_speed": "fast" }"#);
        assert!(matches!(result, Err(GameError::Config(_))));
    }

    #[test]
    fn test_unknown_placement_is_error() {
        let result = GameConfig::from_json(r#"{ "coin_placement": "anywhere" }"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_zero_coin_size_rejected() {
        let result = GameConfig::from_json(r#"{ "coin_size": 0 }"#);
        assert!(matches!(result, Err(GameError::Config(_))));
    }

    #[test]
    fn test_oversized_coin_rejected() {
        let result = GameConfig::from_json(r#"{ "window_width": 40, "coin_size": 50 }"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let config = GameConfig::load_or_default("assets/config/does_not_exist.json").unwrap();
        assert_eq!(config, GameConfig::default());
    }
}
