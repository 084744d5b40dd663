//! Score counter HUD
//!
//! Shows `Coins: N` centered at the top of the screen. The text texture is
//! rebuilt whenever the score changes, never edited in place.
//!
//! # Example
//!
//! ```rust
//! use crate::ui::ScoreDisplay;
//!
//! // Create once, at score 0
//! let mut score_display = ScoreDisplay::new(&mut backend, 0)?;
//!
//! // After a pickup
//! score_display.set_score(&mut backend, state.score)?;
//!
//! // In the render phase
//! score_display.render(&mut backend)?;
//! ```

use crate::backend::Backend;
use crate::error::GameError;
use sdl2::pixels::Color;
use sdl2::rect::Rect;

#[derive(Debug, Clone)]
pub struct ScoreDisplayStyle {
    pub text_color: Color,
    /// Distance from the top of the window
    pub top: i32,
}

impl Default for ScoreDisplayStyle {
    fn default() -> Self {
        ScoreDisplayStyle {
            text_color: Color::RGB(0, 0, 0),
            top: 10,
        }
    }
}

pub fn score_text(score: u32) -> String {
    format!("Coins: {}", score)
}

pub struct ScoreDisplay<B: Backend> {
    text: String,
    texture: B::Texture,
    rect: Rect,
    style: ScoreDisplayStyle,
}

impl<B: Backend> ScoreDisplay<B> {
    pub fn new(backend: &mut B, score: u32) -> Result<Self, GameError> {
        Self::with_style(backend, score, ScoreDisplayStyle::default())
    }

    pub fn with_style(
        backend: &mut B,
        score: u32,
        style: ScoreDisplayStyle,
    ) -> Result<Self, GameError> {
        let text = score_text(score);
        let texture = backend.render_text(&text, style.text_color)?;
        let rect = Self::place(backend, &texture, style.top);

        Ok(ScoreDisplay {
            text,
            texture,
            rect,
            style,
        })
    }

    /// Rebuilds the text for a new score
    ///
    /// The new texture is created before anything is replaced. If rendering
    /// fails, the error is returned and the current text, texture and rect
    /// stay as they were.
    pub fn set_score(&mut self, backend: &mut B, score: u32) -> Result<(), GameError> {
        let text = score_text(score);
        let texture = backend.render_text(&text, self.style.text_color)?;
        let rect = Self::place(backend, &texture, self.style.top);

        // Assigning drops the old texture
        self.texture = texture;
        self.text = text;
        self.rect = rect;
        log::debug!("Score text {:?} at {:?}", self.text, self.rect);
        Ok(())
    }

    pub fn render(&self, backend: &mut B) -> Result<(), GameError> {
        backend.draw_texture(&self.texture, self.rect)
    }

    #[cfg(test)]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[cfg(test)]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    fn place(backend: &B, texture: &B::Texture, top: i32) -> Rect {
        let (window_width, _) = backend.window_size();
        let (width, height) = backend.texture_size(texture);
        Rect::new(
            (window_width as i32 - width as i32) / 2,
            top,
            width,
            height,
        )
    }
}
