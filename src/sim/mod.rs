//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod level;
pub mod star;
pub mod state;
pub mod tick;

pub use collision::{Rect, star_hits_player};
pub use level::{Level, SpawnTimer, default_levels, spawn_star};
pub use star::{Star, star_points};
pub use state::{GamePhase, GameState, Player};
pub use tick::{GameEvent, TickInput, tick};
