//! Gameplay HUD
//!
//! Elements drawn over the play field in screen coordinates. They hold their
//! own textures and are redrawn every frame by the game session.
//!
//! # Available Components
//!
//! - [`ScoreDisplay`] - `Coins: N` counter at the top of the screen

pub mod score_display;

pub use score_display::ScoreDisplay;
