use std::fmt;

/// Errors that can stop the game
///
/// Every variant is fatal: the application logs it and exits with a
/// non-zero status. Nothing is retried.
#[derive(Debug, Clone, PartialEq)]
pub enum GameError {
    /// SDL, TTF, window, renderer or event pump could not be created
    Init(String),

    /// Font file missing or unreadable
    FontLoad {
        path: String,
        reason: String,
    },

    /// Text could not be rasterized into a surface
    TextRender(String),

    /// Surface could not be turned into a texture
    TextureCreate(String),

    /// A draw call was rejected by the renderer
    Render(String),

    /// Configuration file exists but could not be read or parsed
    Config(String),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GameError::Init(msg) => write!(f, "Initialization failed: {}", msg),
            GameError::FontLoad { path, reason } => {
                write!(f, "Couldn't load font {}: {}", path, reason)
            }
            GameError::TextRender(msg) => write!(f, "Couldn't render text: {}", msg),
            GameError::TextureCreate(msg) => write!(f, "Couldn't create texture: {}", msg),
            GameError::Render(msg) => write!(f, "Render error: {}", msg),
            GameError::Config(msg) => write!(f, "Config error: {}", msg),
        }
    }
}

impl std::error::Error for GameError {}

impl From<serde_json::Error> for GameError {
    fn from(err: serde_json::Error) -> Self {
        GameError::Config(err.to_string())
    }
}

impl From<std::io::Error> for GameError {
    fn from(err: std::io::Error) -> Self {
        GameError::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_error_names_path() {
        let err = GameError::FontLoad {
            path: "./assets/missing.ttf".to_string(),
            reason: "not found".to_string(),
        };

        let msg = err.to_string();
        assert!(msg.contains("./assets/missing.ttf"));
        assert!(msg.contains("not found"));
    }

    #[test]
    fn test_json_error_becomes_config_error() {
        let parse_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: GameError = parse_err.into();

        assert!(matches!(err, GameError::Config(_)));
    }
}
