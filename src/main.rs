//! Star Skipper entry point
//!
//! Opens the window, loads assets, and runs the fixed-timestep game loop.

use macroquad::prelude::{
    Conf, KeyCode, get_frame_time, get_time, is_key_down, is_key_pressed, is_quit_requested,
    next_frame, prevent_quit,
};

use star_skipper::consts::*;
use star_skipper::renderer::Renderer;
use star_skipper::sim::{GameEvent, GamePhase, GameState, TickInput, tick};
use star_skipper::ui::FpsCounter;
use star_skipper::{GameResult, Settings};

fn window_conf() -> Conf {
    Conf {
        window_title: WINDOW_TITLE.to_string(),
        window_width: WINDOW_WIDTH as i32,
        window_height: WINDOW_HEIGHT as i32,
        window_resizable: false,
        ..Default::default()
    }
}

/// Game instance holding all state
struct Game {
    state: GameState,
    renderer: Renderer,
    accumulator: f32,
    input: TickInput,
    fps: FpsCounter,
    lost_screen_secs: f32,
}

impl Game {
    fn new(settings: &Settings, renderer: Renderer) -> Self {
        let seed = settings.resolve_seed();
        log::info!("Starting run with seed {}", seed);
        Self {
            state: GameState::with_levels(seed, settings.levels.clone()),
            renderer,
            accumulator: 0.0,
            input: TickInput::default(),
            fps: FpsCounter::default(),
            lost_screen_secs: settings.lost_screen_secs,
        }
    }

    /// Sample the keyboard. Pause latches until a tick consumes it.
    fn poll_input(&mut self) {
        self.input.left = is_key_down(KeyCode::Left);
        self.input.right = is_key_down(KeyCode::Right);
        if is_key_pressed(KeyCode::P) || is_key_pressed(KeyCode::Escape) {
            self.input.pause = true;
        }
    }

    /// Run simulation ticks
    fn update(&mut self, dt: f32) {
        let dt = dt.min(0.1);
        self.accumulator += dt;

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            let events = tick(&mut self.state, &self.input, SIM_DT);
            self.accumulator -= SIM_DT;
            substeps += 1;

            // Clear one-shot inputs after processing
            self.input.pause = false;

            for event in events {
                self.log_event(event);
            }
            if self.state.phase.is_over() {
                self.accumulator = 0.0;
                break;
            }
        }
    }

    fn log_event(&self, event: GameEvent) {
        match event {
            GameEvent::LevelCleared { cleared } => {
                log::info!("Level {} completed. Moving to level {}", cleared, cleared + 1);
            }
            GameEvent::AllLevelsCleared => {
                log::info!("Congratulations! You completed all levels.");
            }
            GameEvent::PlayerHit => {
                log::info!(
                    "Hit by a star on level {} after {:.1}s",
                    self.state.level_index + 1,
                    self.state.elapsed_secs()
                );
            }
            GameEvent::StarsSpawned { count } => {
                log::debug!(
                    "Spawned {} stars, next burst in {}ms",
                    count,
                    self.state.spawn_timer.interval_ms
                );
            }
            GameEvent::Paused => log::info!("Paused"),
            GameEvent::Resumed => log::info!("Resumed"),
        }
    }

    /// Main loop; returns when the run ends or the window closes
    async fn run(&mut self) {
        loop {
            if is_quit_requested() {
                log::info!("Window closed");
                return;
            }

            self.poll_input();
            self.update(get_frame_time());
            let fps = self.fps.record(get_time());

            match self.state.phase {
                GamePhase::Lost => {
                    self.show_lost_screen().await;
                    return;
                }
                GamePhase::Victory => return,
                GamePhase::Playing | GamePhase::Paused => self.renderer.draw(&self.state, fps),
            }

            next_frame().await;
        }
    }

    /// Hold the "You Lost!" overlay for the configured time
    async fn show_lost_screen(&mut self) {
        let mut shown = 0.0;
        while shown < self.lost_screen_secs && !is_quit_requested() {
            let fps = self.fps.record(get_time());
            self.renderer.draw_lost_screen(&self.state, fps);
            next_frame().await;
            shown += get_frame_time();
        }
    }
}

async fn start() -> GameResult<()> {
    let settings = Settings::load()?;
    let renderer = Renderer::load(&settings).await?;
    let mut game = Game::new(&settings, renderer);
    game.run().await;
    Ok(())
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Star Skipper starting...");
    prevent_quit();

    if let Err(e) = start().await {
        log::error!("{}", e);
        std::process::exit(1);
    }

    log::info!("Goodbye");
}
