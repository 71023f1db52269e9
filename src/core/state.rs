//! # Game State
//!
//! Everything the controller owns for one session. No terminal types here;
//! presentation lives in the `tui` module.
//!
//! ```text
//! Game
//! ├── board: Board              // the single live board
//! ├── phase: Phase              // where the state machine is
//! ├── moves: u32                // successful (board-changing) moves
//! └── rng: Box<dyn RngCore>     // injected spawn randomness
//! ```
//!
//! State changes only happen through `update(game, action)` in action.rs.

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use crate::core::board::{Board, create_initial_board};

/// Title and message shown in the exit confirmation modal.
pub const EXIT_TITLE: &str = "Exit?";
pub const EXIT_MESSAGE: &str = "Are you sure you want to quit?";

/// Where the game loop currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Playing,
    /// Waiting on a yes/no answer in the exit modal.
    ConfirmingExit,
    /// No move can change the board; the next key ends the session.
    GameOver,
    Terminated,
}

pub struct Game {
    pub board: Board,
    pub phase: Phase,
    pub moves: u32,
    rng: Box<dyn RngCore>,
}

impl Game {
    /// Start a game with two tiles drawn from `rng`.
    pub fn new(mut rng: Box<dyn RngCore>) -> Self {
        let board = create_initial_board(&mut *rng);
        Self::with_board(board, rng)
    }

    /// Start from a known board. Used by tests and scripted scenarios.
    pub fn with_board(board: Board, rng: Box<dyn RngCore>) -> Self {
        Self {
            board,
            phase: Phase::Playing,
            moves: 0,
            rng,
        }
    }

    /// Seeded game, or one seeded from OS entropy when `seed` is `None`.
    pub fn seeded(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        Self::new(Box::new(rng))
    }

    pub fn rng_mut(&mut self) -> &mut dyn RngCore {
        &mut *self.rng
    }

    pub fn is_terminated(&self) -> bool {
        self.phase == Phase::Terminated
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_game;

    #[test]
    fn test_game_new_defaults() {
        let game = Game::seeded(Some(5));
        assert_eq!(game.phase, Phase::Playing);
        assert_eq!(game.moves, 0);
        assert_eq!(game.board.empty_cells().len(), 14);
    }

    #[test]
    fn test_same_seed_same_start() {
        assert_eq!(Game::seeded(Some(42)).board, Game::seeded(Some(42)).board);
    }

    #[test]
    fn test_with_board_keeps_board() {
        let board = Board::from_rows([[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]]);
        let game = test_game(board);
        assert_eq!(game.board, board);
        assert!(!game.is_terminated());
    }
}
