//! Game settings
//!
//! Read once at startup from a JSON file. A missing file means defaults;
//! a present but broken file is an error.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::consts::LOST_SCREEN_SECS;
use crate::error::{GameError, GameResult};
use crate::sim::{Level, default_levels};

/// Environment variable pointing at an alternate config file
pub const CONFIG_ENV_VAR: &str = "STAR_SKIPPER_CONFIG";

/// Config file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "star_skipper.json";

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Background image, stretched to the window
    pub background_path: String,
    /// Player sprite, stretched to the player box
    pub player_sprite_path: String,
    /// Fixed run seed; random when absent
    pub seed: Option<u64>,
    /// Show FPS counter
    pub show_fps: bool,
    /// Seconds the "You Lost!" overlay stays up
    pub lost_screen_secs: f32,
    /// Level progression, played in order
    pub levels: Vec<Level>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            background_path: "assets/background.png".to_string(),
            player_sprite_path: "assets/player.png".to_string(),
            seed: None,
            show_fps: false,
            lost_screen_secs: LOST_SCREEN_SECS,
            levels: default_levels(),
        }
    }
}

impl Settings {
    /// Config path from the environment, else the default file name
    pub fn config_path() -> PathBuf {
        std::env::var_os(CONFIG_ENV_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
    }

    /// Load settings from the resolved config path
    pub fn load() -> GameResult<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load settings from `path`, falling back to defaults if it does not exist
    pub fn load_from(path: &Path) -> GameResult<Self> {
        if !path.exists() {
            log::info!("No config at {}, using default settings", path.display());
            return Ok(Self::default());
        }

        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Parse and validate settings from a JSON string
    pub fn from_json(json: &str) -> GameResult<Self> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reject configurations the game cannot run
    pub fn validate(&self) -> GameResult<()> {
        if self.levels.is_empty() {
            return Err(GameError::InvalidConfig(
                "at least one level is required".to_string(),
            ));
        }
        for (i, level) in self.levels.iter().enumerate() {
            if level.num_stars == 0 {
                return Err(GameError::InvalidConfig(format!(
                    "level {} has no stars",
                    i + 1
                )));
            }
            if !is_positive(level.star_vel) {
                return Err(GameError::InvalidConfig(format!(
                    "level {} star velocity must be positive, got {}",
                    i + 1,
                    level.star_vel
                )));
            }
        }
        if !is_positive(self.lost_screen_secs) {
            return Err(GameError::InvalidConfig(format!(
                "lost_screen_secs must be positive, got {}",
                self.lost_screen_secs
            )));
        }
        Ok(())
    }

    /// Configured seed, or a fresh random one
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }
}

/// Finite and strictly above zero
fn is_positive(x: f32) -> bool {
    x.is_finite() && x > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.levels.len(), 3);
        assert_eq!(settings.lost_screen_secs, 4.0);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings = Settings::from_json(r#"{ "seed": 7, "show_fps": true }"#).unwrap();
        assert_eq!(settings.seed, Some(7));
        assert!(settings.show_fps);
        assert_eq!(settings.background_path, "assets/background.png");
        assert_eq!(settings.levels, default_levels());
    }

    #[test]
    fn test_custom_levels() {
        let json = r#"{ "levels": [ { "num_stars": 2, "star_vel": 1.5 } ] }"#;
        let settings = Settings::from_json(json).unwrap();
        assert_eq!(settings.levels, vec![Level::new(2, 1.5)]);
    }

    #[test]
    fn test_rejects_empty_levels() {
        let err = Settings::from_json(r#"{ "levels": [] }"#).unwrap_err();
        assert!(matches!(err, GameError::InvalidConfig(_)));
    }

    #[test]
    fn test_rejects_bad_velocity() {
        let json = r#"{ "levels": [ { "num_stars": 2, "star_vel": 0.0 } ] }"#;
        let err = Settings::from_json(json).unwrap_err();
        assert!(err.to_string().contains("velocity"));
    }

    #[test]
    fn test_rejects_zero_star_level() {
        let json = r#"{ "levels": [ { "num_stars": 0, "star_vel": 1.0 } ] }"#;
        let err = Settings::from_json(json).unwrap_err();
        assert!(matches!(err, GameError::InvalidConfig(_)));
        assert!(err.to_string().contains("level 1 has no stars"));
    }

    #[test]
    fn test_rejects_non_positive_lost_duration() {
        let err = Settings::from_json(r#"{ "lost_screen_secs": 0 }"#).unwrap_err();
        assert!(err.to_string().contains("lost_screen_secs"));

        let err = Settings::from_json(r#"{ "lost_screen_secs": -2.5 }"#).unwrap_err();
        assert!(matches!(err, GameError::InvalidConfig(_)));
    }

    #[test]
    fn test_is_positive() {
        assert!(is_positive(0.5));
        assert!(!is_positive(0.0));
        assert!(!is_positive(-1.0));
        assert!(!is_positive(f32::NAN));
        assert!(!is_positive(f32::INFINITY));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = Settings::from_json("{ not json").unwrap_err();
        assert!(matches!(err, GameError::Json(_)));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let path = Path::new("definitely/not/here/star_skipper.json");
        let settings = Settings::load_from(path).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_fixed_seed_resolves() {
        let settings = Settings {
            seed: Some(1234),
            ..Default::default()
        };
        assert_eq!(settings.resolve_seed(), 1234);
    }
}
