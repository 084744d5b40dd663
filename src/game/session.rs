// GameSession - the gameplay loop
//
// Each frame runs three phases in a fixed order:
// 1. Input: drain events, move the player, note a quit request
// 2. Collision: on player/coin overlap, score, move the coin, rebuild the score text
// 3. Render: background, score text, player, coin, present
//
// A quit request ends the frame right after the input phase. The loop checks
// the quit flag at the top of each iteration, so there is no mid-frame exit.

use super::coin::CoinSpawner;
use super::state::GameState;
use crate::backend::Backend;
use crate::collision::overlaps;
use crate::config::GameConfig;
use crate::error::GameError;
use crate::input_system::InputEvent;
use crate::ui::ScoreDisplay;
use sdl2::pixels::Color;

#[derive(Debug, Clone)]
pub struct SessionStyle {
    pub background_color: Color,
    pub player_color: Color,
    pub coin_color: Color,
}

impl Default for SessionStyle {
    fn default() -> Self {
        SessionStyle {
            background_color: Color::RGB(2, 204, 254),
            player_color: Color::RGB(0, 0, 0),
            coin_color: Color::RGB(255, 255, 0),
        }
    }
}

pub struct GameSession<B: Backend> {
    state: GameState,
    score_display: ScoreDisplay<B>,
    spawner: CoinSpawner,
    style: SessionStyle,
    clamp_player: bool,
    quit: bool,
}

impl<B: Backend> GameSession<B> {
    /// Starts a session at score 0 from the config's starting layout
    ///
    /// `score_display` is the one built at startup; it must read `Coins: 0`.
    pub fn new(backend: &B, config: &GameConfig, score_display: ScoreDisplay<B>) -> Self {
        let (width, height) = backend.window_size();
        let state = GameState::new(width, height, config);
        let spawner = CoinSpawner::new(config.coin_placement, config.rng_seed);

        log::info!(
            "Session started: speed {}, placement {:?}, clamp {}",
            state.speed,
            spawner.placement(),
            config.clamp_player
        );

        Self::with_state(state, score_display, spawner, config.clamp_player)
    }

    pub fn with_state(
        state: GameState,
        score_display: ScoreDisplay<B>,
        spawner: CoinSpawner,
        clamp_player: bool,
    ) -> Self {
        GameSession {
            state,
            score_display,
            spawner,
            style: SessionStyle::default(),
            clamp_player,
            quit: false,
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[cfg(test)]
    pub fn score_text(&self) -> &str {
        self.score_display.text()
    }

    pub fn is_running(&self) -> bool {
        !self.quit
    }

    /// Input phase. Events are applied in arrival order; a quit stops
    /// processing of the rest of the batch.
    pub fn handle_input(&mut self, events: &[InputEvent], window_size: (u32, u32)) {
        for event in events {
            match event {
                InputEvent::Quit => {
                    log::info!("Quit requested");
                    self.quit = true;
                    return;
                }
                InputEvent::KeyDown(key) => self.state.move_player(*key),
            }
        }

        if self.clamp_player {
            self.state.clamp_player(window_size.0, window_size.1);
        }
    }

    /// Collision phase. Returns `true` when a coin was collected.
    pub fn update(&mut self, backend: &mut B) -> Result<bool, GameError> {
        if !overlaps(&self.state.player, &self.state.coin) {
            return Ok(false);
        }

        self.state.score += 1;
        log::info!("Coin collected! Score: {}", self.state.score);

        let (width, height) = backend.window_size();
        self.spawner.relocate(&mut self.state.coin, width, height);

        self.score_display
            .set_score(backend, self.state.score)
            .inspect_err(|e| log::error!("Score text refresh failed: {}", e))?;

        Ok(true)
    }

    /// Render phase
    pub fn render(&self, backend: &mut B) -> Result<(), GameError> {
        backend.set_draw_color(self.style.background_color);
        backend.clear();

        self.score_display.render(backend)?;

        backend.set_draw_color(self.style.player_color);
        backend.fill_rect(self.state.player)?;

        backend.set_draw_color(self.style.coin_color);
        backend.fill_rect(self.state.coin)?;

        backend.present();
        Ok(())
    }

    /// Runs one full frame
    pub fn frame(&mut self, backend: &mut B) -> Result<(), GameError> {
        let events = backend.poll_events();
        self.handle_input(&events, backend.window_size());
        if self.quit {
            return Ok(());
        }

        self.update(backend)?;
        self.render(backend)
    }

    /// Runs frames until quit and hands back the final state
    pub fn run(mut self, backend: &mut B) -> Result<GameState, GameError> {
        while self.is_running() {
            self.frame(backend)?;
        }

        log::info!("Session over with {} coins", self.state.score);
        Ok(self.state)
    }

    #[cfg(test)]
    fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }
}
