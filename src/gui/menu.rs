//! Main Menu
//!
//! The start screen: two stacked buttons (PLAY, EXIT) navigated with the
//! arrow keys and chosen with Return.
//!
//! # State Machine
//!
//! ```text
//! Navigating --Confirm on Play--> Decided(Play)
//! Navigating --Confirm on Exit--> Decided(Exit)
//! Navigating --window close-----> Decided(Quit)
//! ```
//!
//! Up/Down move the selection cyclically and keep the menu in `Navigating`.
//! Once decided, the menu ignores further input and stops drawing.

use crate::backend::{center_in, Backend};
use crate::error::GameError;
use crate::input_system::{InputEvent, Key};
use sdl2::pixels::Color;
use sdl2::rect::Rect;

/// Selectable menu entries, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEntry {
    Play,
    Exit,
}

impl MenuEntry {
    pub const ALL: [MenuEntry; 2] = [MenuEntry::Play, MenuEntry::Exit];

    pub fn label(&self) -> &'static str {
        match self {
            MenuEntry::Play => "Play",
            MenuEntry::Exit => "Exit",
        }
    }

    fn index(self) -> usize {
        match self {
            MenuEntry::Play => 0,
            MenuEntry::Exit => 1,
        }
    }

    fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    /// Entry above this one (wraps to bottom)
    pub fn previous(self) -> Self {
        let count = Self::ALL.len();
        Self::from_index((self.index() + count - 1) % count)
    }

    /// Entry below this one (wraps to top)
    pub fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }
}

/// What the player chose
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuDecision {
    Play,
    Exit,
    /// Window closed while the menu was open
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuStatus {
    Navigating,
    Decided(MenuDecision),
}

/// Menu colors and button geometry
#[derive(Debug, Clone)]
pub struct MenuStyle {
    pub background_color: Color,
    pub selected_color: Color,
    pub unselected_color: Color,
    pub text_color: Color,
    pub button_width: u32,
    pub button_height: u32,
    /// Y of the first button
    pub top: i32,
    /// Vertical space between buttons
    pub gap: i32,
}

impl Default for MenuStyle {
    fn default() -> Self {
        MenuStyle {
            background_color: Color::RGB(255, 255, 255),
            selected_color: Color::RGB(200, 200, 200),
            unselected_color: Color::RGB(150, 150, 150),
            text_color: Color::RGB(0, 0, 0),
            button_width: 200,
            button_height: 50,
            top: 200,
            gap: 20,
        }
    }
}

/// Selection plus the button rectangle of each entry
#[derive(Debug, Clone, PartialEq)]
pub struct MenuState {
    pub selected: MenuEntry,
    buttons: [Rect; 2],
}

impl MenuState {
    /// Lays buttons out centered horizontally, stacked from `style.top`
    pub fn new(window_width: u32, style: &MenuStyle) -> Self {
        let x = (window_width as i32 - style.button_width as i32) / 2;
        let step = style.button_height as i32 + style.gap;

        let buttons = MenuEntry::ALL.map(|entry| {
            Rect::new(
                x,
                style.top + entry.index() as i32 * step,
                style.button_width,
                style.button_height,
            )
        });

        MenuState {
            selected: MenuEntry::Play,
            buttons,
        }
    }

    pub fn button(&self, entry: MenuEntry) -> Rect {
        self.buttons[entry.index()]
    }
}

/// Label for one entry; `labels` is kept in `MenuEntry::ALL` order
struct MenuLabel<T> {
    texture: T,
    rect: Rect,
}

/// Runs the main menu against a backend
///
/// Label textures are rendered once in [`MenuController::new`] and released
/// when the controller is dropped.
pub struct MenuController<B: Backend> {
    state: MenuState,
    status: MenuStatus,
    style: MenuStyle,
    labels: Vec<MenuLabel<B::Texture>>,
}

impl<B: Backend> MenuController<B> {
    pub fn new(backend: &mut B) -> Result<Self, GameError> {
        Self::with_style(backend, MenuStyle::default())
    }

    pub fn with_style(backend: &mut B, style: MenuStyle) -> Result<Self, GameError> {
        let (window_width, _) = backend.window_size();
        let state = MenuState::new(window_width, &style);

        let mut labels = Vec::with_capacity(MenuEntry::ALL.len());
        for entry in MenuEntry::ALL {
            let texture = backend.render_text(entry.label(), style.text_color)?;
            let (width, height) = backend.texture_size(&texture);
            labels.push(MenuLabel {
                texture,
                rect: center_in(state.button(entry), width, height),
            });
        }

        Ok(MenuController {
            state,
            status: MenuStatus::Navigating,
            style,
            labels,
        })
    }

    #[cfg(test)]
    pub fn selected(&self) -> MenuEntry {
        self.state.selected
    }

    #[cfg(test)]
    pub fn status(&self) -> MenuStatus {
        self.status
    }

    /// Applies one input event. No effect once a decision has been made.
    pub fn handle_event(&mut self, event: InputEvent) {
        if self.status != MenuStatus::Navigating {
            return;
        }

        match event {
            InputEvent::Quit => {
                self.status = MenuStatus::Decided(MenuDecision::Quit);
            }
            InputEvent::KeyDown(Key::Up) => {
                self.state.selected = self.state.selected.previous();
            }
            InputEvent::KeyDown(Key::Down) => {
                self.state.selected = self.state.selected.next();
            }
            InputEvent::KeyDown(Key::Confirm) => {
                let decision = match self.state.selected {
                    MenuEntry::Play => MenuDecision::Play,
                    MenuEntry::Exit => MenuDecision::Exit,
                };
                self.status = MenuStatus::Decided(decision);
            }
            InputEvent::KeyDown(Key::Left | Key::Right) => {}
        }
    }

    /// Draws background, buttons and labels, then presents
    pub fn render(&self, backend: &mut B) -> Result<(), GameError> {
        backend.set_draw_color(self.style.background_color);
        backend.clear();

        for entry in MenuEntry::ALL {
            let color = if entry == self.state.selected {
                self.style.selected_color
            } else {
                self.style.unselected_color
            };
            backend.set_draw_color(color);
            backend.fill_rect(self.state.button(entry))?;
        }

        for label in &self.labels {
            backend.draw_texture(&label.texture, label.rect)?;
        }

        backend.present();
        Ok(())
    }

    /// One menu frame: drain input, then draw if still navigating
    pub fn frame(&mut self, backend: &mut B) -> Result<MenuStatus, GameError> {
        for event in backend.poll_events() {
            self.handle_event(event);
        }

        if self.status == MenuStatus::Navigating {
            self.render(backend)?;
        }

        Ok(self.status)
    }

    /// Runs menu frames until a decision is made
    pub fn run(mut self, backend: &mut B) -> Result<MenuDecision, GameError> {
        loop {
            if let MenuStatus::Decided(decision) = self.frame(backend)? {
                log::info!("Menu decision: {:?}", decision);
                return Ok(decision);
            }
        }
    }

    #[cfg(test)]
    fn label_rect(&self, entry: MenuEntry) -> Option<Rect> {
        self.labels.get(entry.index()).map(|label| label.rect)
    }
}
