//! macroquad rendering
//!
//! Draws a `GameState` each frame. Geometry comes from `shapes`; this module
//! only owns textures and issues draw calls.

pub mod shapes;

use macroquad::prelude::{
    DrawTextureParams, FilterMode, Texture2D, clear_background, draw_rectangle,
    draw_text, draw_texture_ex, draw_triangle, load_texture, measure_text, vec2,
};

use crate::consts::{WINDOW_HEIGHT, WINDOW_WIDTH};
use crate::error::{GameError, GameResult};
use crate::settings::Settings;
use crate::sim::{GamePhase, GameState};
use crate::ui;

/// Colors for game elements
pub mod colors {
    use macroquad::prelude::{BLACK, Color, WHITE};

    pub const BACKGROUND: Color = BLACK;
    pub const STAR: Color = Color::new(0.745, 0.745, 0.745, 1.0);
    pub const TEXT: Color = WHITE;
    pub const PAUSE_DIM: Color = Color::new(0.0, 0.0, 0.0, 0.5);
    pub const SPRITE_TINT: Color = WHITE;
}

/// Load a texture, mapping failures into `GameError::Asset`
async fn load_asset(path: &str) -> GameResult<Texture2D> {
    let texture = load_texture(path).await.map_err(|e| GameError::Asset {
        path: path.to_string(),
        reason: format!("{:?}", e),
    })?;
    texture.set_filter(FilterMode::Linear);
    log::info!(
        "Loaded {} ({}x{})",
        path,
        texture.width() as u32,
        texture.height() as u32
    );
    Ok(texture)
}

/// Textures and draw options for the game window
pub struct Renderer {
    background: Texture2D,
    player: Texture2D,
    show_fps: bool,
}

impl Renderer {
    /// Load both image assets named in `settings`
    pub async fn load(settings: &Settings) -> GameResult<Self> {
        let background = load_asset(&settings.background_path).await?;
        let player = load_asset(&settings.player_sprite_path).await?;
        Ok(Self {
            background,
            player,
            show_fps: settings.show_fps,
        })
    }

    /// Draw one frame of gameplay
    pub fn draw(&self, state: &GameState, fps: u32) {
        clear_background(colors::BACKGROUND);
        draw_texture_ex(
            &self.background,
            0.0,
            0.0,
            colors::SPRITE_TINT,
            DrawTextureParams {
                dest_size: Some(vec2(WINDOW_WIDTH, WINDOW_HEIGHT)),
                ..Default::default()
            },
        );

        self.draw_hud(state, fps);

        let rect = state.player.rect;
        draw_texture_ex(
            &self.player,
            rect.x,
            rect.y,
            colors::SPRITE_TINT,
            DrawTextureParams {
                dest_size: Some(vec2(rect.width, rect.height)),
                ..Default::default()
            },
        );

        let star_color = colors::STAR;
        for star in &state.stars {
            for [a, b, c] in shapes::star_triangles(star) {
                draw_triangle(vec2(a.x, a.y), vec2(b.x, b.y), vec2(c.x, c.y), star_color);
            }
        }

        if state.phase == GamePhase::Paused {
            draw_rectangle(0.0, 0.0, WINDOW_WIDTH, WINDOW_HEIGHT, colors::PAUSE_DIM);
            draw_centered_text(ui::PAUSED_TEXT);
        }
    }

    fn draw_hud(&self, state: &GameState, fps: u32) {
        let mut y = ui::HUD_MARGIN;
        let mut lines = vec![
            ui::time_label(state.elapsed_secs()),
            ui::level_label(state.level_index, state.levels.len()),
        ];
        if self.show_fps {
            lines.push(ui::fps_label(fps));
        }

        for line in &lines {
            let dims = measure_text(line, None, ui::HUD_FONT_SIZE, 1.0);
            draw_text(
                line,
                ui::HUD_MARGIN,
                y + dims.offset_y,
                ui::HUD_FONT_SIZE as f32,
                colors::TEXT,
            );
            y += dims.height + ui::HUD_MARGIN / 2.0;
        }
    }

    /// "You Lost!" on top of the last frame
    pub fn draw_lost_screen(&self, state: &GameState, fps: u32) {
        self.draw(state, fps);
        draw_centered_text(ui::LOST_TEXT);
    }
}

fn draw_centered_text(text: &str) {
    let dims = measure_text(text, None, ui::HUD_FONT_SIZE, 1.0);
    let (x, y) = ui::centered(dims.width, dims.height);
    draw_text(
        text,
        x,
        y + dims.offset_y,
        ui::HUD_FONT_SIZE as f32,
        colors::TEXT,
    );
}
