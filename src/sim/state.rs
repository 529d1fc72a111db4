//! Game state and core simulation types

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::collision::Rect;
use super::level::{Level, SpawnTimer, default_levels};
use super::star::Star;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Game is paused
    Paused,
    /// A star hit the player
    Lost,
    /// Every level was cleared
    Victory,
}

impl GamePhase {
    /// Lost and Victory end the run
    pub fn is_over(&self) -> bool {
        matches!(self, GamePhase::Lost | GamePhase::Victory)
    }
}

/// The player's sprite box
#[derive(Debug, Clone)]
pub struct Player {
    pub rect: Rect,
    /// Horizontal speed (pixels per tick)
    pub velocity: f32,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            rect: Rect::new(
                PLAYER_START_X,
                WINDOW_HEIGHT - PLAYER_HEIGHT,
                PLAYER_WIDTH,
                PLAYER_HEIGHT,
            ),
            velocity: PLAYER_VEL,
        }
    }
}

impl Player {
    /// Apply held keys for one tick, staying inside the window
    pub fn step(&mut self, left: bool, right: bool) {
        let mut dx = 0.0;
        if left {
            dx -= self.velocity;
        }
        if right {
            dx += self.velocity;
        }
        let max_x = WINDOW_WIDTH - self.rect.width;
        self.rect.x = (self.rect.x + dx).clamp(0.0, max_x);
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    pub levels: Vec<Level>,
    /// Current level index (0-based)
    pub level_index: usize,
    pub stars: Vec<Star>,
    pub player: Player,
    pub spawn_timer: SpawnTimer,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub phase: GamePhase,
}

impl GameState {
    /// New game with the default level table
    pub fn new(seed: u64) -> Self {
        Self::with_levels(seed, default_levels())
    }

    /// New game with a custom level table. An empty table is an immediate win.
    pub fn with_levels(seed: u64, levels: Vec<Level>) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let stars = levels
            .first()
            .map(|level| level.generate_stars(&mut rng))
            .unwrap_or_default();
        let phase = if levels.is_empty() {
            GamePhase::Victory
        } else {
            GamePhase::Playing
        };

        Self {
            seed,
            rng,
            levels,
            level_index: 0,
            stars,
            player: Player::default(),
            spawn_timer: SpawnTimer::default(),
            time_ticks: 0,
            phase,
        }
    }

    /// The level being played, or None once all are cleared
    pub fn current_level(&self) -> Option<&Level> {
        self.levels.get(self.level_index)
    }

    /// Seconds of simulated play
    pub fn elapsed_secs(&self) -> f32 {
        self.time_ticks as f32 * SIM_DT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state() {
        let state = GameState::new(42);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.level_index, 0);
        assert_eq!(state.stars.len(), 5);
        assert_eq!(state.player.rect.x, PLAYER_START_X);
        assert_eq!(state.player.rect.bottom(), WINDOW_HEIGHT);
    }

    #[test]
    fn test_empty_level_table_is_victory() {
        let state = GameState::with_levels(1, Vec::new());
        assert_eq!(state.phase, GamePhase::Victory);
        assert!(state.stars.is_empty());
        assert!(state.current_level().is_none());
    }

    #[test]
    fn test_player_clamped_left() {
        let mut player = Player::default();
        player.rect.x = 3.0;
        player.step(true, false);
        assert_eq!(player.rect.x, 0.0);
        player.step(true, false);
        assert_eq!(player.rect.x, 0.0);
    }

    #[test]
    fn test_player_clamped_right() {
        let mut player = Player::default();
        let max_x = WINDOW_WIDTH - PLAYER_WIDTH;
        player.rect.x = max_x - 2.0;
        player.step(false, true);
        assert_eq!(player.rect.x, max_x);
    }

    #[test]
    fn test_both_keys_cancel() {
        let mut player = Player::default();
        player.step(true, true);
        assert_eq!(player.rect.x, PLAYER_START_X);
    }

    #[test]
    fn test_phase_is_over() {
        assert!(GamePhase::Lost.is_over());
        assert!(GamePhase::Victory.is_over());
        assert!(!GamePhase::Paused.is_over());
        assert!(!GamePhase::Playing.is_over());
    }
}
