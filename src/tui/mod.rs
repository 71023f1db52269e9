//! # TUI Adapter
//!
//! The ratatui-specific layer. Implements the controller's two collaborators:
//! [`TerminalKeys`] turns crossterm key presses into game keys, and
//! [`TerminalRenderer`] draws the board, the exit modal and the game-over
//! message.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop blocks on the next key and only draws when
//! `update()` asks for it. Unbound keys cost nothing.

mod component;
pub mod components;
mod event;
pub mod ui;

use log::info;
use std::io::stdout;

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use ratatui::DefaultTerminal;

use crate::core::config::ResolvedConfig;
use crate::core::controller::{self, Renderer};
use crate::core::state::Game;

pub use event::{TerminalKeys, map_key};

/// Draws to the real terminal.
pub struct TerminalRenderer {
    terminal: DefaultTerminal,
    color: bool,
}

impl TerminalRenderer {
    pub fn new(terminal: DefaultTerminal, color: bool) -> Self {
        Self { terminal, color }
    }
}

impl Renderer for TerminalRenderer {
    fn draw(&mut self, game: &Game) -> std::io::Result<()> {
        let color = self.color;
        self.terminal.draw(|f| ui::draw_ui(f, game, color))?;
        Ok(())
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), Hide)?;
        info!("Terminal modes enabled (cursor hidden)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), Show);
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut game = Game::seeded(config.seed);
    info!("New game (seed: {:?})", config.seed);

    let terminal = ratatui::init();
    let result = TerminalModeGuard::new().and_then(|_terminal_mode_guard| {
        let mut renderer = TerminalRenderer::new(terminal, config.color);
        controller::run(&mut game, &mut TerminalKeys, &mut renderer)
    });

    ratatui::restore();
    result
}
