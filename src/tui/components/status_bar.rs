//! # StatusBar Component
//!
//! Single line under the grid: how many moves have landed and the largest
//! tile so far. Purely presentational, like the other props-based
//! components.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Span;

pub struct StatusBar {
    pub moves: u32,
    pub max_tile: u32,
}

impl StatusBar {
    pub fn new(moves: u32, max_tile: u32) -> Self {
        Self { moves, max_tile }
    }

    pub fn text(&self) -> String {
        format!("Moves: {} | Largest tile: {}", self.moves, self.max_tile)
    }
}

impl Component for StatusBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let span = Span::styled(self.text(), Style::default().fg(Color::DarkGray));
        frame.render_widget(span, area);
    }
}
