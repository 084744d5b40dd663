//! SDL2 Backend
//!
//! Wraps the canvas, texture creator, TTF font and event pump created in
//! `main`. Field order matters: Rust drops fields top to bottom, so the font
//! goes before the canvas and window.

use super::Backend;
use crate::error::GameError;
use crate::input_system::{self, InputEvent};
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::{Canvas, Texture, TextureCreator};
use sdl2::ttf::Font;
use sdl2::video::{Window, WindowContext};
use sdl2::EventPump;

pub struct SdlBackend<'a> {
    font: Font<'a, 'static>,
    texture_creator: &'a TextureCreator<WindowContext>,
    canvas: Canvas<Window>,
    event_pump: EventPump,
}

impl<'a> SdlBackend<'a> {
    pub fn new(
        canvas: Canvas<Window>,
        texture_creator: &'a TextureCreator<WindowContext>,
        font: Font<'a, 'static>,
        event_pump: EventPump,
    ) -> Self {
        SdlBackend {
            font,
            texture_creator,
            canvas,
            event_pump,
        }
    }
}

impl<'a> Backend for SdlBackend<'a> {
    type Texture = Texture<'a>;

    fn window_size(&self) -> (u32, u32) {
        self.canvas.window().size()
    }

    fn poll_events(&mut self) -> Vec<InputEvent> {
        input_system::poll_events(&mut self.event_pump)
    }

    fn render_text(&mut self, text: &str, color: Color) -> Result<Texture<'a>, GameError> {
        let surface = self
            .font
            .render(text)
            .solid(color)
            .map_err(|e| GameError::TextRender(format!("{:?}: {}", text, e)))?;

        // surface is freed when this function returns, success or not
        self.texture_creator
            .create_texture_from_surface(&surface)
            .map_err(|e| GameError::TextureCreate(format!("{:?}: {}", text, e)))
    }

    fn texture_size(&self, texture: &Texture<'a>) -> (u32, u32) {
        let query = texture.query();
        (query.width, query.height)
    }

    fn set_draw_color(&mut self, color: Color) {
        self.canvas.set_draw_color(color);
    }

    fn clear(&mut self) {
        self.canvas.clear();
    }

    fn fill_rect(&mut self, rect: Rect) -> Result<(), GameError> {
        self.canvas.fill_rect(rect).map_err(GameError::Render)
    }

    fn draw_texture(&mut self, texture: &Texture<'a>, dest: Rect) -> Result<(), GameError> {
        self.canvas
            .copy(texture, None, dest)
            .map_err(GameError::Render)
    }

    fn present(&mut self) {
        self.canvas.present();
    }
}
