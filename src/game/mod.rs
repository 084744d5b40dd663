// Game module - gameplay state and the per-frame loop
//
// This module contains:
// - state.rs: GameState (player, coin, speed, score) and movement
// - coin.rs: CoinSpawner, where a collected coin goes next
// - session.rs: GameSession, the input/collision/render frame loop

pub mod coin;
pub mod session;
pub mod state;

pub use session::GameSession;
