//! Screen-Space GUI
//!
//! Full-screen interfaces shown outside of gameplay. Right now that is the
//! main menu, which decides whether a game session starts at all.
//!
//! # Example Usage
//!
//! ```rust
//! use crate::gui::{MenuController, MenuDecision};
//!
//! let menu = MenuController::new(&mut backend)?;
//! match menu.run(&mut backend)? {
//!     MenuDecision::Play => { /* start a session */ }
//!     MenuDecision::Exit | MenuDecision::Quit => { /* shut down */ }
//! }
//! ```

pub mod menu;

pub use menu::{MenuController, MenuDecision};
