//! Recording backend for tests
//!
//! Input is scripted as one batch of events per frame. Every draw call is
//! recorded so tests can check what was drawn and in which order. Textures
//! track how many are alive so tests can catch leaks.

use super::Backend;
use crate::error::GameError;
use crate::input_system::InputEvent;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use std::cell::Cell;
use std::collections::VecDeque;
use std::rc::Rc;

/// Fake glyph metrics: every character is 14x30
pub const CHAR_WIDTH: u32 = 14;
pub const TEXT_HEIGHT: u32 = 30;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    SetColor(Color),
    Clear,
    FillRect(Rect),
    DrawTexture { text: String, dest: Rect },
    Present,
}

#[derive(Debug)]
pub struct MockTexture {
    pub text: String,
    width: u32,
    height: u32,
    live: Rc<Cell<usize>>,
}

impl Drop for MockTexture {
    fn drop(&mut self) {
        self.live.set(self.live.get() - 1);
    }
}

pub struct MockBackend {
    width: u32,
    height: u32,
    frames: VecDeque<Vec<InputEvent>>,
    pub calls: Vec<DrawCall>,
    pub rendered_texts: Vec<String>,
    pub fail_text_render: bool,
    live_textures: Rc<Cell<usize>>,
}

impl MockBackend {
    pub fn new(width: u32, height: u32) -> Self {
        MockBackend {
            width,
            height,
            frames: VecDeque::new(),
            calls: Vec::new(),
            rendered_texts: Vec::new(),
            fail_text_render: false,
            live_textures: Rc::new(Cell::new(0)),
        }
    }

    /// Queues the events returned by the next `poll_events` call
    pub fn push_frame(&mut self, events: Vec<InputEvent>) {
        self.frames.push_back(events);
    }

    pub fn live_textures(&self) -> usize {
        self.live_textures.get()
    }

    pub fn present_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| **call == DrawCall::Present)
            .count()
    }
}

impl Backend for MockBackend {
    type Texture = MockTexture;

    fn window_size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn poll_events(&mut self) -> Vec<InputEvent> {
        self.frames.pop_front().unwrap_or_default()
    }

    fn render_text(&mut self, text: &str, _color: Color) -> Result<MockTexture, GameError> {
        if self.fail_text_render {
            return Err(GameError::TextRender(format!("{:?}: mock failure", text)));
        }

        self.rendered_texts.push(text.to_string());
        self.live_textures.set(self.live_textures.get() + 1);

        Ok(MockTexture {
            text: text.to_string(),
            width: text.chars().count() as u32 * CHAR_WIDTH,
            height: TEXT_HEIGHT,
            live: Rc::clone(&self.live_textures),
        })
    }

    fn texture_size(&self, texture: &MockTexture) -> (u32, u32) {
        (texture.width, texture.height)
    }

    fn set_draw_color(&mut self, color: Color) {
        self.calls.push(DrawCall::SetColor(color));
    }

    fn clear(&mut self) {
        self.calls.push(DrawCall::Clear);
    }

    fn fill_rect(&mut self, rect: Rect) -> Result<(), GameError> {
        self.calls.push(DrawCall::FillRect(rect));
        Ok(())
    }

    fn draw_texture(&mut self, texture: &MockTexture, dest: Rect) -> Result<(), GameError> {
        self.calls.push(DrawCall::DrawTexture {
            text: texture.text.clone(),
            dest,
        });
        Ok(())
    }

    fn present(&mut self) {
        self.calls.push(DrawCall::Present);
    }
}
