// Gameplay state: the player square, the coin, and the score
//
// Nothing here talks to the backend. The session mutates a GameState each
// frame and reads it back to draw.

use crate::config::GameConfig;
use crate::input_system::Key;
use sdl2::rect::Rect;

/// Y of the coin at the start of a session
const COIN_START_Y: i32 = 400;

#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub player: Rect,
    pub coin: Rect,
    /// Pixels moved per key press
    pub speed: i32,
    pub score: u32,
}

impl GameState {
    /// Fresh session: player centered, coin centered horizontally below it
    pub fn new(window_width: u32, window_height: u32, config: &GameConfig) -> Self {
        let player_size = config.player_size;
        let coin_size = config.coin_size;

        let player = Rect::new(
            (window_width as i32 - player_size as i32) / 2,
            (window_height as i32 - player_size as i32) / 2,
            player_size,
            player_size,
        );

        let coin_y = COIN_START_Y.min(window_height as i32 - coin_size as i32).max(0);
        let coin = Rect::new(
            (window_width as i32 - coin_size as i32) / 2,
            coin_y,
            coin_size,
            coin_size,
        );

        GameState {
            player,
            coin,
            speed: config.player_speed,
            score: 0,
        }
    }

    /// Moves the player one step for a direction key. Confirm does nothing.
    pub fn move_player(&mut self, key: Key) {
        let (dx, dy) = match key {
            Key::Up => (0, -self.speed),
            Key::Down => (0, self.speed),
            Key::Left => (-self.speed, 0),
            Key::Right => (self.speed, 0),
            Key::Confirm => return,
        };
        self.player.offset(dx, dy);
    }

    /// Pulls the player back inside a `width` x `height` window
    pub fn clamp_player(&mut self, width: u32, height: u32) {
        let max_x = (width as i32 - self.player.width() as i32).max(0);
        let max_y = (height as i32 - self.player.height() as i32).max(0);

        self.player.set_x(self.player.x().clamp(0, max_x));
        self.player.set_y(self.player.y().clamp(0, max_y));
    }
}
