use proptest::prelude::*;
use rand::{SeedableRng, rngs::StdRng};
use twenty48::core::board::{
    Board, Direction, Line, SIZE, apply_move, apply_move_down, apply_move_left,
    apply_move_right, apply_move_up, compress_line, has_any_move, merge_line, spawn_tile,
    transpose,
};

// ============================================================================
// Strategies
// ============================================================================

/// 0 or a power of two up to 2048.
fn cell() -> impl Strategy<Value = u32> {
    prop_oneof![3 => Just(0u32), 5 => (1u32..=11).prop_map(|k| 1 << k)]
}

fn line() -> impl Strategy<Value = Line> {
    [cell(), cell(), cell(), cell()]
}

fn board() -> impl Strategy<Value = Board> {
    [line(), line(), line(), line()].prop_map(Board::from_rows)
}

fn direction() -> impl Strategy<Value = Direction> {
    prop_oneof![
        Just(Direction::Left),
        Just(Direction::Right),
        Just(Direction::Up),
        Just(Direction::Down),
    ]
}

fn mirror(board: Board) -> Board {
    let mut rows = *board.rows();
    for row in rows.iter_mut() {
        row.reverse();
    }
    Board::from_rows(rows)
}

/// Reference check: no empty cell and no equal orthogonal neighbours.
fn is_stuck(board: &Board) -> bool {
    let rows = board.rows();
    for r in 0..SIZE {
        for c in 0..SIZE {
            if rows[r][c] == 0 {
                return false;
            }
            if r + 1 < SIZE && rows[r][c] == rows[r + 1][c] {
                return false;
            }
            if c + 1 < SIZE && rows[r][c] == rows[r][c + 1] {
                return false;
            }
        }
    }
    true
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn compress_keeps_tiles_in_order(input in line()) {
        let out = compress_line(input);
        let tiles: Vec<u32> = input.iter().copied().filter(|&v| v != 0).collect();
        prop_assert_eq!(&out[..tiles.len()], &tiles[..]);
        prop_assert!(out[tiles.len()..].iter().all(|&v| v == 0));
    }

    #[test]
    fn merge_preserves_line_sum(input in line()) {
        let before: u32 = input.iter().sum();
        let after: u32 = merge_line(input).iter().sum();
        prop_assert_eq!(before, after);
    }

    #[test]
    fn left_and_right_are_mirror_images(b in board()) {
        let left = apply_move_left(b);
        let right = apply_move_right(mirror(b));
        prop_assert_eq!(mirror(left.board), right.board);
        prop_assert_eq!(left.changed, right.changed);
    }

    #[test]
    fn vertical_moves_are_transpose_conjugates(b in board()) {
        let up = apply_move_up(b);
        let via_left = apply_move_left(transpose(b));
        prop_assert_eq!(up.board, transpose(via_left.board));
        prop_assert_eq!(up.changed, via_left.changed);

        let down = apply_move_down(b);
        let via_right = apply_move_right(transpose(b));
        prop_assert_eq!(down.board, transpose(via_right.board));
        prop_assert_eq!(down.changed, via_right.changed);
    }

    #[test]
    fn changed_flag_matches_board_difference(b in board(), dir in direction()) {
        let result = apply_move(b, dir);
        prop_assert_eq!(result.changed, result.board != b);
    }

    #[test]
    fn unchanged_second_move_returns_its_input(b in board(), dir in direction()) {
        let first = apply_move(b, dir);
        let second = apply_move(first.board, dir);
        if !second.changed {
            prop_assert_eq!(second.board, first.board);
        }
    }

    #[test]
    fn has_any_move_iff_not_stuck(b in board()) {
        prop_assert_eq!(has_any_move(&b), !is_stuck(&b));
    }

    #[test]
    fn no_move_means_no_direction_changes_board(b in board()) {
        if !has_any_move(&b) {
            for dir in Direction::ALL {
                prop_assert!(!apply_move(b, dir).changed);
            }
        }
    }

    #[test]
    fn spawn_adds_one_small_tile(b in board(), seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let spawned = spawn_tile(b, &mut rng);
        let empty_before = b.empty_cells().len();
        if empty_before == 0 {
            prop_assert_eq!(spawned, b);
        } else {
            prop_assert_eq!(spawned.empty_cells().len(), empty_before - 1);
            let added: Vec<u32> = spawned
                .rows()
                .iter()
                .flatten()
                .zip(b.rows().iter().flatten())
                .filter(|(after, before)| after != before)
                .map(|(after, _)| *after)
                .collect();
            prop_assert_eq!(added.len(), 1);
            prop_assert!(added[0] == 2 || added[0] == 4);
        }
    }
}
