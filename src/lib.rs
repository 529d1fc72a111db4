//! Star Skipper - dodge the falling stars
//!
//! Core modules:
//! - `sim`: Deterministic simulation (player, stars, levels, collisions)
//! - `renderer`: macroquad drawing and shape tessellation
//! - `ui`: HUD text and overlay layout
//! - `settings`: JSON configuration
//! - `error`: Error type shared by startup code

pub mod error;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod ui;

pub use error::{GameError, GameResult};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (the game was tuned at 60 frames per second)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Window dimensions (pixels)
    pub const WINDOW_WIDTH: f32 = 1000.0;
    pub const WINDOW_HEIGHT: f32 = 800.0;
    pub const WINDOW_TITLE: &str = "Star Skipper";

    /// Player sprite size and speed (pixels per tick)
    pub const PLAYER_WIDTH: f32 = 30.0;
    pub const PLAYER_HEIGHT: f32 = 60.0;
    pub const PLAYER_VEL: f32 = 5.0;
    pub const PLAYER_START_X: f32 = 200.0;

    /// Star geometry
    pub const STAR_RADIUS: f32 = 10.0;
    pub const STAR_POINTS: usize = 5;

    /// Spawn burst timing (milliseconds)
    pub const SPAWN_INTERVAL_START_MS: f32 = 2000.0;
    pub const SPAWN_INTERVAL_STEP_MS: f32 = 50.0;
    pub const SPAWN_INTERVAL_MIN_MS: f32 = 200.0;
    pub const SPAWN_BURST: usize = 5;

    /// How long the "You Lost!" overlay stays up before exit
    pub const LOST_SCREEN_SECS: f32 = 4.0;
}
