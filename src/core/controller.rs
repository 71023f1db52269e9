//! # Game Loop Controller
//!
//! Drives a `Game` with two collaborators: something that hands out key
//! presses and something that draws. Both are traits so the loop runs the
//! same against a real terminal or a scripted test double.
//!
//! Each key is fully handled (move, spawn, draw, loss check) before the next
//! one is read. There is a single thread of control and no timeouts.

use std::io;

use log::info;

use crate::core::action::{Action, Effect, Key, update};
use crate::core::state::Game;

/// Blocking source of key presses.
pub trait KeySource {
    fn next_key(&mut self) -> io::Result<Key>;
}

/// Draws the current game.
///
/// Implementations pick what to show from `game.phase`: the board alone, the
/// board under the exit modal, or the board with the game-over message.
pub trait Renderer {
    fn draw(&mut self, game: &Game) -> io::Result<()>;
}

/// Run until the game reaches `Phase::Terminated`.
pub fn run<K, R>(game: &mut Game, keys: &mut K, renderer: &mut R) -> io::Result<()>
where
    K: KeySource + ?Sized,
    R: Renderer + ?Sized,
{
    info!("Game loop starting: {}", game.board);
    renderer.draw(game)?;

    while !game.is_terminated() {
        let key = keys.next_key()?;
        let action = Action::from_key(key, game.phase);
        match update(game, action) {
            Effect::None => {}
            Effect::Redraw => renderer.draw(game)?,
            Effect::Quit => break,
        }
    }

    info!(
        "Game loop finished: {} moves, largest tile {}",
        game.moves,
        game.board.max_tile()
    );
    Ok(())
}
