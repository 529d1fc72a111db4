//! Levels, star spawning, and the burst timer

use glam::Vec2;
use rand::Rng;
use serde::Deserialize;

use super::star::Star;
use crate::consts::*;

/// One entry of the level table
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Level {
    /// Stars dropped when the level starts
    pub num_stars: u32,
    /// Fall speed for this level's stars (pixels per tick)
    pub star_vel: f32,
}

impl Level {
    pub const fn new(num_stars: u32, star_vel: f32) -> Self {
        Self {
            num_stars,
            star_vel,
        }
    }

    /// Build the opening wave of stars for this level
    pub fn generate_stars<R: Rng>(&self, rng: &mut R) -> Vec<Star> {
        (0..self.num_stars)
            .map(|_| spawn_star(rng, self.star_vel))
            .collect()
    }
}

/// Default level progression
pub fn default_levels() -> Vec<Level> {
    vec![Level::new(5, 3.0), Level::new(8, 4.0), Level::new(12, 5.0)]
}

/// Create a star somewhere above the window, fully inside it horizontally
pub fn spawn_star<R: Rng>(rng: &mut R, velocity: f32) -> Star {
    let max_x = (WINDOW_WIDTH - 2.0 * STAR_RADIUS) as i32;
    let x = rng.random_range(0..=max_x) as f32;
    let y = rng.random_range(-(WINDOW_HEIGHT as i32)..=0) as f32;
    Star::new(
        Vec2::new(x + STAR_RADIUS, y + STAR_RADIUS),
        STAR_RADIUS,
        velocity,
    )
}

/// Accelerating timer for extra star bursts
///
/// Each firing shortens the next interval until it bottoms out.
#[derive(Debug, Clone, PartialEq)]
pub struct SpawnTimer {
    /// Milliseconds accumulated since the last burst
    pub elapsed_ms: f32,
    /// Current interval between bursts (milliseconds)
    pub interval_ms: f32,
}

impl Default for SpawnTimer {
    fn default() -> Self {
        Self {
            elapsed_ms: 0.0,
            interval_ms: SPAWN_INTERVAL_START_MS,
        }
    }
}

impl SpawnTimer {
    /// Advance by `dt_ms`; returns true when a burst is due
    pub fn advance(&mut self, dt_ms: f32) -> bool {
        self.elapsed_ms += dt_ms;
        if self.elapsed_ms > self.interval_ms {
            self.interval_ms = (self.interval_ms - SPAWN_INTERVAL_STEP_MS).max(SPAWN_INTERVAL_MIN_MS);
            self.elapsed_ms = 0.0;
            true
        } else {
            false
        }
    }
}
