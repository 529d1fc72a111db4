//! Startup errors
//!
//! The simulation itself never fails; everything here comes from loading
//! configuration or assets before the first frame.

use std::fmt;

/// Errors raised while starting the game
#[derive(Debug)]
pub enum GameError {
    /// A texture could not be loaded or decoded
    Asset { path: String, reason: String },
    /// Reading the config file failed
    Io(std::io::Error),
    /// The config file is not valid JSON for `Settings`
    Json(serde_json::Error),
    /// The config parsed but describes an unplayable game
    InvalidConfig(String),
}

/// Type alias for Results using GameError
pub type GameResult<T> = Result<T, GameError>;

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::Asset { path, reason } => {
                write!(f, "failed to load asset '{}': {}", path, reason)
            }
            GameError::Io(err) => write!(f, "I/O error: {}", err),
            GameError::Json(err) => write!(f, "malformed config: {}", err),
            GameError::InvalidConfig(msg) => write!(f, "invalid config: {}", msg),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Io(err) => Some(err),
            GameError::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for GameError {
    fn from(err: std::io::Error) -> Self {
        GameError::Io(err)
    }
}

impl From<serde_json::Error> for GameError {
    fn from(err: serde_json::Error) -> Self {
        GameError::Json(err)
    }
}
