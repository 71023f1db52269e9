//! # BoardView Component
//!
//! The 4×4 grid, one `[ value ]` cell per tile, with empty cells left blank.
//! Stateless: it receives the board as a prop each frame.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::board::Board;
use crate::tui::component::Component;

/// Rendered width of one cell including its trailing gap.
pub const CELL_WIDTH: u16 = 7;

pub struct BoardView {
    pub board: Board,
    pub color: bool,
}

impl BoardView {
    pub fn new(board: Board, color: bool) -> Self {
        Self { board, color }
    }

    fn lines(&self) -> Vec<Line<'static>> {
        self.board
            .rows()
            .iter()
            .map(|row| {
                let spans: Vec<Span> = row
                    .iter()
                    .flat_map(|&value| {
                        [
                            Span::styled(format_cell(value), tile_style(value, self.color)),
                            Span::raw(" "),
                        ]
                    })
                    .collect();
                Line::from(spans)
            })
            .collect()
    }
}

impl Component for BoardView {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Paragraph::new(self.lines()), area);
    }
}

/// `[    ]` for an empty cell, otherwise the value centered in four columns.
pub fn format_cell(value: u32) -> String {
    if value == 0 {
        "[    ]".to_string()
    } else {
        format!("[{:^4}]", value)
    }
}

fn tile_style(value: u32, color: bool) -> Style {
    if !color || value == 0 {
        return Style::default();
    }
    let fg = match value {
        2 => Color::White,
        4 => Color::LightYellow,
        8 => Color::Yellow,
        16 => Color::LightRed,
        32 => Color::Red,
        64 => Color::Magenta,
        128 => Color::LightCyan,
        256 => Color::Cyan,
        512 => Color::LightGreen,
        1024 => Color::Green,
        _ => Color::LightBlue,
    };
    let style = Style::default().fg(fg);
    if value >= 128 {
        style.add_modifier(Modifier::BOLD)
    } else {
        style
    }
}
