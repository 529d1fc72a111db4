//! Fixed timestep simulation tick
//!
//! Advances the game by one frame's worth of movement.

use super::collision::star_hits_player;
use super::level::spawn_star;
use super::state::{GamePhase, GameState};
use crate::consts::SPAWN_BURST;

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Left arrow held
    pub left: bool,
    /// Right arrow held
    pub right: bool,
    /// Pause toggle (one-shot)
    pub pause: bool,
}

/// Notable things that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// The burst timer added stars
    StarsSpawned { count: usize },
    /// Level `cleared` (1-based) is done and the next one started
    LevelCleared { cleared: usize },
    /// The last level was cleared
    AllLevelsCleared,
    /// A star reached the player
    PlayerHit,
    Paused,
    Resumed,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if input.pause {
        match state.phase {
            GamePhase::Playing => {
                state.phase = GamePhase::Paused;
                events.push(GameEvent::Paused);
            }
            GamePhase::Paused => {
                state.phase = GamePhase::Playing;
                events.push(GameEvent::Resumed);
            }
            _ => {}
        }
    }

    if state.phase != GamePhase::Playing {
        return events;
    }

    state.time_ticks += 1;

    // Extra bursts at the current level's speed
    if state.spawn_timer.advance(dt * 1000.0) {
        if let Some(level) = state.current_level().copied() {
            for _ in 0..SPAWN_BURST {
                let star = spawn_star(&mut state.rng, level.star_vel);
                state.stars.push(star);
            }
            events.push(GameEvent::StarsSpawned {
                count: SPAWN_BURST,
            });
        }
    }

    state.player.step(input.left, input.right);

    // Move, cull, and collide in one pass
    let player_rect = state.player.rect;
    let mut i = 0;
    while i < state.stars.len() {
        let star = &mut state.stars[i];
        star.advance();
        if star.is_off_screen() {
            state.stars.remove(i);
        } else if star_hits_player(&player_rect, star) {
            state.phase = GamePhase::Lost;
            events.push(GameEvent::PlayerHit);
            return events;
        } else {
            i += 1;
        }
    }

    check_level_completion(state, &mut events);

    events
}

/// Move to the next level once the field is empty
fn check_level_completion(state: &mut GameState, events: &mut Vec<GameEvent>) {
    if !state.stars.is_empty() {
        return;
    }

    state.level_index += 1;
    match state.current_level().copied() {
        Some(level) => {
            state.stars = level.generate_stars(&mut state.rng);
            events.push(GameEvent::LevelCleared {
                cleared: state.level_index,
            });
        }
        None => {
            state.phase = GamePhase::Victory;
            events.push(GameEvent::AllLevelsCleared);
        }
    }
}
