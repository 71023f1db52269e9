//! # Actions
//!
//! Every key the player presses becomes an `Action`, and `update()` folds it
//! into the `Game`. The returned `Effect` tells the loop whether to redraw,
//! stay quiet, or stop.
//!
//! ```text
//! Game + Action  →  update()  →  Game' + Effect
//! ```
//!
//! The only side effect is drawing spawn randomness from the game's own
//! injected source, so a seeded game replays exactly.

use log::{debug, info};

use crate::core::board::{Direction, apply_move, has_any_move, spawn_tile};
use crate::core::state::{Game, Phase};

/// Abstract key event produced by an input adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Quit,
    Yes,
    No,
    /// Ctrl+C: leave immediately from any phase.
    ForceQuit,
    /// The terminal changed size; nothing happened in the game.
    Resize,
    /// Anything the game has no binding for.
    Other,
}

impl Key {
    pub fn direction(self) -> Option<Direction> {
        match self {
            Key::Up => Some(Direction::Up),
            Key::Down => Some(Direction::Down),
            Key::Left => Some(Direction::Left),
            Key::Right => Some(Direction::Right),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Move(Direction),
    RequestQuit,
    /// Answer to the exit modal.
    ConfirmExit(bool),
    ForceQuit,
    /// Draw again without touching the game.
    Redraw,
    /// A key with no meaning in the current phase.
    Ignored,
}

impl Action {
    /// Interpret a key in the context of the current phase.
    pub fn from_key(key: Key, phase: Phase) -> Action {
        match key {
            Key::ForceQuit => return Action::ForceQuit,
            Key::Resize => return Action::Redraw,
            _ => {}
        }
        match phase {
            Phase::Playing => match key {
                Key::Quit => Action::RequestQuit,
                other => other.direction().map_or(Action::Ignored, Action::Move),
            },
            Phase::ConfirmingExit => match key {
                Key::Yes => Action::ConfirmExit(true),
                Key::No => Action::ConfirmExit(false),
                _ => Action::Ignored,
            },
            // Any key at all dismisses the game-over screen.
            Phase::GameOver => Action::RequestQuit,
            Phase::Terminated => Action::Ignored,
        }
    }
}

/// What the loop should do after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Redraw,
    Quit,
}

pub fn update(game: &mut Game, action: Action) -> Effect {
    debug!("update: phase={:?} action={:?}", game.phase, action);
    match (game.phase, action) {
        (Phase::Terminated, _) => Effect::Quit,

        (_, Action::ForceQuit) => terminate(game),
        (_, Action::Redraw) => Effect::Redraw,

        (Phase::Playing, Action::Move(direction)) => {
            let result = apply_move(game.board, direction);
            game.board = result.board;
            if result.changed {
                game.board = spawn_tile(game.board, game.rng_mut());
                game.moves += 1;
                debug!("moved {:?}: {}", direction, game.board);
            }
            if !has_any_move(&game.board) {
                info!(
                    "Game over after {} moves, largest tile {}",
                    game.moves,
                    game.board.max_tile()
                );
                game.phase = Phase::GameOver;
            }
            Effect::Redraw
        }
        (Phase::Playing, Action::RequestQuit) => {
            game.phase = Phase::ConfirmingExit;
            Effect::Redraw
        }

        (Phase::ConfirmingExit, Action::ConfirmExit(true)) => terminate(game),
        (Phase::ConfirmingExit, Action::ConfirmExit(false)) => {
            game.phase = Phase::Playing;
            Effect::Redraw
        }

        (Phase::GameOver, _) => terminate(game),

        _ => Effect::None,
    }
}

fn terminate(game: &mut Game) -> Effect {
    info!("Session terminated after {} moves", game.moves);
    game.phase = Phase::Terminated;
    Effect::Quit
}
