//! HUD text and overlay layout
//!
//! Pure helpers; the renderer measures and draws the strings.

use crate::consts::{WINDOW_HEIGHT, WINDOW_WIDTH};

/// HUD font size in pixels
pub const HUD_FONT_SIZE: u16 = 30;

/// Top-left HUD margin
pub const HUD_MARGIN: f32 = 10.0;

pub const LOST_TEXT: &str = "You Lost!";
pub const PAUSED_TEXT: &str = "Paused";

/// Elapsed play time, whole seconds rounded half to even
pub fn time_label(elapsed_secs: f32) -> String {
    format!("Time: {}s", elapsed_secs.round_ties_even() as i64)
}

/// 1-based level indicator, clamped once every level is done
pub fn level_label(level_index: usize, total: usize) -> String {
    format!("Level: {}/{}", (level_index + 1).min(total), total)
}

pub fn fps_label(fps: u32) -> String {
    format!("FPS: {}", fps)
}

/// Top-left corner that centers a `width` x `height` box in the window
pub fn centered(width: f32, height: f32) -> (f32, f32) {
    (WINDOW_WIDTH / 2.0 - width / 2.0, WINDOW_HEIGHT / 2.0 - height / 2.0)
}

/// Rolling FPS counter over the last 60 frames
#[derive(Debug, Clone)]
pub struct FpsCounter {
    frame_times: [f64; 60],
    frame_index: usize,
    fps: u32,
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self {
            frame_times: [0.0; 60],
            frame_index: 0,
            fps: 0,
        }
    }
}

impl FpsCounter {
    /// Record a frame at `time` seconds and return the current estimate
    pub fn record(&mut self, time: f64) -> u32 {
        self.frame_times[self.frame_index] = time;
        self.frame_index = (self.frame_index + 1) % self.frame_times.len();

        // Oldest sample is the one we will overwrite next
        let oldest = self.frame_times[self.frame_index];
        if oldest > 0.0 {
            let elapsed = time - oldest;
            if elapsed > 0.0 {
                self.fps = ((self.frame_times.len() - 1) as f64 / elapsed).round() as u32;
            }
        }
        self.fps
    }
}
