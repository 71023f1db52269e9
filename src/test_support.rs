//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::collections::VecDeque;
use std::io;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::core::action::Key;
use crate::core::board::Board;
use crate::core::controller::{KeySource, Renderer};
use crate::core::state::{Game, Phase};

/// Creates a test Game on a fixed board with a seeded generator.
pub fn test_game(board: Board) -> Game {
    Game::with_board(board, Box::new(StdRng::seed_from_u64(0)))
}

/// Replays a fixed list of keys, then reports end of input.
pub struct ScriptedKeys {
    keys: VecDeque<Key>,
}

impl ScriptedKeys {
    pub fn new(keys: Vec<Key>) -> Self {
        Self { keys: keys.into() }
    }
}

impl KeySource for ScriptedKeys {
    fn next_key(&mut self) -> io::Result<Key> {
        self.keys
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "no more scripted keys"))
    }
}

/// Records a snapshot of every frame it is asked to draw.
#[derive(Default)]
pub struct RecordingRenderer {
    pub frames: Vec<(Board, Phase)>,
}

impl Renderer for RecordingRenderer {
    fn draw(&mut self, game: &Game) -> io::Result<()> {
        self.frames.push((game.board, game.phase));
        Ok(())
    }
}
