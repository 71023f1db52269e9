//! # Board Engine
//!
//! Pure functions over a 4×4 grid of tiles. Every operation takes a board by
//! value and hands back a new one; nothing here touches the terminal.
//!
//! ```text
//!   apply_move_left   ──────────────────────────── the only real primitive
//!   apply_move_right  = reverse ∘ left ∘ reverse
//!   apply_move_up     = transpose ∘ left ∘ transpose
//!   apply_move_down   = transpose ∘ right ∘ transpose
//! ```
//!
//! Randomness is injected through [`rand::Rng`], so a seeded generator gives
//! a fully reproducible game.

use std::fmt;

use rand::Rng;

/// Width and height of the board.
pub const SIZE: usize = 4;

/// Probability that a spawned tile is a 2 (otherwise it is a 4).
pub const SPAWN_TWO_PROBABILITY: f64 = 0.9;

/// One row (or, after a transpose, one column) of the board.
pub type Line = [u32; SIZE];

/// A direction the player can slide the tiles in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];
}

/// Fixed 4×4 grid. `0` is an empty cell; every other value is a power of two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board([Line; SIZE]);

impl Board {
    /// A board with no tiles.
    pub const EMPTY: Board = Board([[0; SIZE]; SIZE]);

    pub fn from_rows(rows: [Line; SIZE]) -> Self {
        Board(rows)
    }

    pub fn rows(&self) -> &[Line; SIZE] {
        &self.0
    }

    pub fn get(&self, row: usize, col: usize) -> u32 {
        self.0[row][col]
    }

    /// Coordinates of every empty cell, in row-major order.
    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        let mut cells = Vec::new();
        for (r, row) in self.0.iter().enumerate() {
            for (c, &value) in row.iter().enumerate() {
                if value == 0 {
                    cells.push((r, c));
                }
            }
        }
        cells
    }

    /// Largest tile on the board (`0` for an empty board).
    pub fn max_tile(&self) -> u32 {
        self.0.iter().flatten().copied().max().unwrap_or(0)
    }

    fn map_rows(self, f: impl Fn(Line) -> Line) -> Board {
        Board(self.0.map(f))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " / ")?;
            }
            write!(f, "{} {} {} {}", row[0], row[1], row[2], row[3])?;
        }
        Ok(())
    }
}

/// Outcome of sliding the board in one direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveResult {
    pub board: Board,
    /// True iff `board` differs from the input in at least one cell.
    pub changed: bool,
}

// ============================================================================
// Line primitives
// ============================================================================

/// Drop the zeros, pack the remaining tiles to the left in their original
/// order, and pad with zeros on the right.
pub fn compress_line(line: Line) -> Line {
    let mut out = [0; SIZE];
    for (slot, value) in out.iter_mut().zip(line.into_iter().filter(|&v| v != 0)) {
        *slot = value;
    }
    out
}

/// One left-to-right pass: an equal, non-zero neighbour pair becomes
/// `(2v, 0)`. The doubled cell is not compared again during the same pass,
/// so `[2, 2, 2, 2]` yields `[4, 0, 4, 0]` rather than cascading.
pub fn merge_line(mut line: Line) -> Line {
    for i in 0..SIZE - 1 {
        if line[i] != 0 && line[i] == line[i + 1] {
            line[i] *= 2;
            line[i + 1] = 0;
        }
    }
    line
}

fn slide_line_left(line: Line) -> Line {
    compress_line(merge_line(compress_line(line)))
}

fn reverse_line(mut line: Line) -> Line {
    line.reverse();
    line
}

// ============================================================================
// Geometric transforms
// ============================================================================

/// Rows become columns.
pub fn transpose(board: Board) -> Board {
    let rows = board.0;
    Board(std::array::from_fn(|r| std::array::from_fn(|c| rows[c][r])))
}

fn mirror(board: Board) -> Board {
    board.map_rows(reverse_line)
}

// ============================================================================
// Moves
// ============================================================================

pub fn apply_move_left(board: Board) -> MoveResult {
    let moved = board.map_rows(slide_line_left);
    MoveResult {
        board: moved,
        changed: moved != board,
    }
}

pub fn apply_move_right(board: Board) -> MoveResult {
    let result = apply_move_left(mirror(board));
    MoveResult {
        board: mirror(result.board),
        changed: result.changed,
    }
}

pub fn apply_move_up(board: Board) -> MoveResult {
    let result = apply_move_left(transpose(board));
    MoveResult {
        board: transpose(result.board),
        changed: result.changed,
    }
}

pub fn apply_move_down(board: Board) -> MoveResult {
    let result = apply_move_right(transpose(board));
    MoveResult {
        board: transpose(result.board),
        changed: result.changed,
    }
}

pub fn apply_move(board: Board, direction: Direction) -> MoveResult {
    match direction {
        Direction::Left => apply_move_left(board),
        Direction::Right => apply_move_right(board),
        Direction::Up => apply_move_up(board),
        Direction::Down => apply_move_down(board),
    }
}

/// `false` means no direction can change the board: the game is lost.
pub fn has_any_move(board: &Board) -> bool {
    let rows = board.rows();
    for r in 0..SIZE {
        for c in 0..SIZE {
            let value = rows[r][c];
            if value == 0 {
                return true;
            }
            if r + 1 < SIZE && value == rows[r + 1][c] {
                return true;
            }
            if c + 1 < SIZE && value == rows[r][c + 1] {
                return true;
            }
        }
    }
    false
}

// ============================================================================
// Spawning
// ============================================================================

/// Place a 2 (90%) or a 4 (10%) on a uniformly chosen empty cell.
///
/// A full board comes back unchanged.
pub fn spawn_tile<R: Rng + ?Sized>(board: Board, rng: &mut R) -> Board {
    let empty = board.empty_cells();
    if empty.is_empty() {
        return board;
    }
    let (r, c) = empty[rng.random_range(0..empty.len())];
    let value = if rng.random_bool(SPAWN_TWO_PROBABILITY) { 2 } else { 4 };
    let mut rows = board.0;
    rows[r][c] = value;
    Board(rows)
}

/// An empty board with two spawned tiles.
pub fn create_initial_board<R: Rng + ?Sized>(rng: &mut R) -> Board {
    let board = spawn_tile(Board::EMPTY, rng);
    spawn_tile(board, rng)
}
