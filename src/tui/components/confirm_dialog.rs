//! # Confirm Dialog Component
//!
//! Small centered modal with a title, a message and a `[ y ]   [ n ]`
//! prompt. It draws over whatever is underneath; the yes/no answer itself
//! comes back through the key source, not through this component.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Padding, Paragraph};

use crate::tui::component::Component;

pub const PROMPT: &str = "[ y ]   [ n ]";

const HEIGHT: u16 = 7;
const MIN_WIDTH: u16 = 26;

pub struct ConfirmDialog<'a> {
    pub title: &'a str,
    pub message: &'a str,
}

impl<'a> ConfirmDialog<'a> {
    pub fn new(title: &'a str, message: &'a str) -> Self {
        Self { title, message }
    }

    /// Width fits the longer of title and message plus margins.
    pub fn width(&self) -> u16 {
        let text = self.title.chars().count().max(self.message.chars().count()) as u16;
        (text + 6).max(MIN_WIDTH)
    }
}

impl Component for ConfirmDialog<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(self.width(), HEIGHT, area);

        // Clear underlying content
        frame.render_widget(Clear, overlay);

        let block = Block::bordered()
            .border_style(Style::default().fg(Color::Yellow))
            .padding(Padding::horizontal(1));

        let lines = vec![
            Line::styled(self.title, Style::default().add_modifier(Modifier::BOLD)),
            Line::default(),
            Line::raw(self.message),
            Line::default(),
            Line::raw(PROMPT).alignment(Alignment::Center),
        ];

        frame.render_widget(Paragraph::new(lines).block(block), overlay);
    }
}

/// A `width` × `height` rect centered in `outer`, clamped to fit.
fn centered_rect(width: u16, height: u16, outer: Rect) -> Rect {
    let width = width.min(outer.width);
    let height = height.min(outer.height);
    Rect {
        x: outer.x + (outer.width - width) / 2,
        y: outer.y + (outer.height - height) / 2,
        width,
        height,
    }
}
