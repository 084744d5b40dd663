//! Presentation Backend
//!
//! The menu and gameplay loops never talk to SDL2 directly. They drive a
//! [`Backend`], which owns the window, renderer, font and event queue.
//!
//! # Resource Ownership
//!
//! Text goes straight from string to texture in [`Backend::render_text`]. The
//! intermediate surface is a local inside that call and is freed on every
//! path out of it. Textures are released by `Drop`, so replacing a texture
//! (`old = new`) releases the old one, and an early `?` return can't leak.
//!
//! # Implementations
//!
//! - [`sdl::SdlBackend`] - the real window
//! - `mock::MockBackend` - scripted input and recorded draw calls (tests only)

pub mod sdl;

#[cfg(test)]
pub mod mock;

use crate::error::GameError;
use crate::input_system::InputEvent;
use sdl2::pixels::Color;
use sdl2::rect::Rect;

pub use sdl::SdlBackend;

/// Everything the game loops need from the windowing/rendering layer
pub trait Backend {
    /// Backend-owned texture handle. Dropping it releases the texture.
    type Texture;

    /// Window size in pixels, used for all layout
    fn window_size(&self) -> (u32, u32);

    /// Drains all pending input events without blocking
    fn poll_events(&mut self) -> Vec<InputEvent>;

    /// Renders `text` with the loaded font and uploads it as a texture
    fn render_text(&mut self, text: &str, color: Color) -> Result<Self::Texture, GameError>;

    /// Width and height of a texture in pixels
    fn texture_size(&self, texture: &Self::Texture) -> (u32, u32);

    fn set_draw_color(&mut self, color: Color);

    fn clear(&mut self);

    fn fill_rect(&mut self, rect: Rect) -> Result<(), GameError>;

    fn draw_texture(&mut self, texture: &Self::Texture, dest: Rect) -> Result<(), GameError>;

    /// Shows the frame that has been drawn since the last present
    fn present(&mut self);
}

/// Centers a `width` x `height` box inside `bounds`
///
/// Used for the menu labels. Offsets can go negative when the box is larger
/// than `bounds`, which keeps it centered instead of clamping to the edge.
pub fn center_in(bounds: Rect, width: u32, height: u32) -> Rect {
    Rect::new(
        bounds.x() + (bounds.width() as i32 - width as i32) / 2,
        bounds.y() + (bounds.height() as i32 - height as i32) / 2,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_in_button() {
        let button = Rect::new(250, 200, 200, 50);
        let label = center_in(button, 60, 30);

        assert_eq!(label, Rect::new(320, 210, 60, 30));
    }

    #[test]
    fn test_center_in_wider_than_bounds() {
        let button = Rect::new(100, 100, 40, 20);
        let label = center_in(button, 80, 20);

        assert_eq!(label.x(), 80);
        assert_eq!(label.y(), 100);
    }
}
