use sdl2::ttf;
use std::process::ExitCode;

mod backend;
mod collision;
mod config;
mod error;
mod game;
mod gui;
mod input_system;
mod ui;

use backend::{Backend, SdlBackend};
use config::{GameConfig, CONFIG_PATH};
use error::GameError;
use game::GameSession;
use gui::{MenuController, MenuDecision};
use ui::ScoreDisplay;

/// How the application ended when nothing failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    /// Player quit from gameplay
    Finished { score: u32 },
    /// EXIT chosen in the menu
    MenuExit,
    /// Window closed in the menu. Treated like EXIT, so it shares its status.
    MenuQuit,
}

impl Outcome {
    fn exit_status(&self) -> u8 {
        match self {
            Outcome::Finished { .. } => 0,
            Outcome::MenuExit | Outcome::MenuQuit => 1,
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run() {
        Ok(outcome) => {
            log::info!("Shutting down: {:?}", outcome);
            ExitCode::from(outcome.exit_status())
        }
        Err(e) => {
            log::error!("{}", e);
            ExitCode::from(1)
        }
    }
}

/// Acquires the backend, runs the menu, then the game session
///
/// SDL resources are locals here, declared in acquisition order. Rust drops
/// them in reverse on every return path, including `?`.
fn run() -> Result<Outcome, GameError> {
    let config = GameConfig::load_or_default(CONFIG_PATH)?;

    let sdl_context = sdl2::init().map_err(GameError::Init)?;
    let video_subsystem = sdl_context.video().map_err(GameError::Init)?;
    let ttf_context = ttf::init().map_err(|e| GameError::Init(e.to_string()))?;

    let window = video_subsystem
        .window(&config.window_title, config.window_width, config.window_height)
        .position_centered()
        .build()
        .map_err(|e| GameError::Init(e.to_string()))?;

    let canvas = window
        .into_canvas()
        .accelerated()
        .build()
        .map_err(|e| GameError::Init(e.to_string()))?;

    let texture_creator = canvas.texture_creator();
    let event_pump = sdl_context.event_pump().map_err(GameError::Init)?;

    let font = ttf_context
        .load_font(&config.font_path, config.font_size)
        .map_err(|reason| GameError::FontLoad {
            path: config.font_path.clone(),
            reason,
        })?;
    log::info!("Loaded font {} at {}pt", config.font_path, config.font_size);

    let mut backend = SdlBackend::new(canvas, &texture_creator, font, event_pump);
    let (width, height) = backend.window_size();
    log::info!("Window: {}x{}", width, height);

    let score_display = ScoreDisplay::new(&mut backend, 0)?;

    play(&mut backend, &config, score_display)
}

/// Menu, then a game session if the player picked PLAY
fn play<B: Backend>(
    backend: &mut B,
    config: &GameConfig,
    score_display: ScoreDisplay<B>,
) -> Result<Outcome, GameError> {
    let menu = MenuController::new(backend)?;
    match menu.run(backend)? {
        MenuDecision::Play => {}
        MenuDecision::Exit => return Ok(Outcome::MenuExit),
        MenuDecision::Quit => return Ok(Outcome::MenuQuit),
    }

    let session = GameSession::new(backend, config, score_display);
    let final_state = session.run(backend)?;

    Ok(Outcome::Finished {
        score: final_state.score,
    })
}
