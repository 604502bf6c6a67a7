//! One-generation state transition.
//!
//! Liveness is standard B3/S23. The color extension: a cell that comes
//! alive, or survives with two or more alive neighbors, inherits the most
//! frequent color among its alive neighbors, ties broken by scan order.
//! All neighbor counts read the pre-step board, never the board being built.

use crate::board::{Board, CellChange};
use crate::cell::{Cell, Color};
use crate::GRID_SIZE;

/// Alive-neighbor count plus a color tally in first-seen scan order.
struct NeighborTally {
    count: u8,
    colors: Vec<(Color, u8)>,
}

impl NeighborTally {
    /// The most frequent neighbor color. On a tie the color seen earliest
    /// in the scan wins, which is why the tally preserves insertion order.
    fn dominant_color(&self) -> Option<Color> {
        let mut best: Option<(Color, u8)> = None;
        for &(color, n) in &self.colors {
            match best {
                Some((_, m)) if n <= m => {}
                _ => best = Some((color, n)),
            }
        }
        best.map(|(color, _)| color)
    }
}

/// Scan the 8 surrounding cells, clipped at the board edges. Offset order
/// is fixed (`dx` outer, `dy` inner, both -1..=1) because the color
/// tie-break depends on it.
fn tally_neighbors(board: &Board, x: usize, y: usize) -> NeighborTally {
    let mut tally = NeighborTally {
        count: 0,
        colors: Vec::new(),
    };

    for dx in -1i32..=1 {
        for dy in -1i32..=1 {
            if dx == 0 && dy == 0 {
                continue;
            }
            let nx = x as i32 + dx;
            let ny = y as i32 + dy;
            if nx < 0 || ny < 0 || nx >= GRID_SIZE as i32 || ny >= GRID_SIZE as i32 {
                continue;
            }
            let neighbor = board.at(nx as usize, ny as usize);
            if neighbor.alive {
                tally.count += 1;
                if let Some(color) = neighbor.color {
                    match tally.colors.iter_mut().find(|(c, _)| *c == color) {
                        Some((_, n)) => *n += 1,
                        None => tally.colors.push((color, 1)),
                    }
                }
            }
        }
    }

    tally
}

/// Advance the board one generation.
///
/// Returns the next board and the list of cells whose `(alive, color)`
/// pair differs from the input, in row-major order. Applying the changes
/// to the input board reproduces the next board exactly.
pub fn step(board: &Board) -> (Board, Vec<CellChange>) {
    let mut next = Board::new();
    let mut changes = Vec::new();

    for x in 0..GRID_SIZE {
        for y in 0..GRID_SIZE {
            let current = board.at(x, y);
            let tally = tally_neighbors(board, x, y);

            let will_live = if current.alive {
                tally.count == 2 || tally.count == 3
            } else {
                tally.count == 3
            };

            let cell = if will_live {
                // A newborn, or a survivor with 2+ neighbors, inherits the
                // dominant neighbor color; an empty tally keeps the current
                // color (None for newborns among colorless neighbors).
                let color = if !current.alive || tally.count >= 2 {
                    tally.dominant_color().or(current.color)
                } else {
                    current.color
                };
                Cell::alive(color)
            } else {
                Cell::dead()
            };

            if cell.alive {
                *next.at_mut(x, y) = cell;
            }
            if cell != current {
                changes.push(CellChange { x, y, cell });
            }
        }
    }

    (next, changes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Offsets in the fixed scan order, for placing neighbors in tests.
    const SCAN_OFFSETS: [(i32, i32); 8] = [
        (-1, -1),
        (-1, 0),
        (-1, 1),
        (0, -1),
        (0, 1),
        (1, -1),
        (1, 0),
        (1, 1),
    ];

    const CENTER: (usize, usize) = (5, 5);

    /// A board with the center cell in the given state and its first
    /// `colors.len()` scan-order neighbors alive with those colors.
    fn board_with_neighbors(center_alive: bool, colors: &[Option<Color>]) -> Board {
        let mut board = Board::new();
        if center_alive {
            board
                .set(CENTER.0, CENTER.1, Cell::alive(Some(Color::Black)))
                .unwrap();
        }
        for (offset, &color) in SCAN_OFFSETS.iter().zip(colors) {
            let x = (CENTER.0 as i32 + offset.0) as usize;
            let y = (CENTER.1 as i32 + offset.1) as usize;
            board.set(x, y, Cell::alive(color)).unwrap();
        }
        board
    }

    #[test]
    fn liveness_rule_over_all_neighbor_counts() {
        for alive in [false, true] {
            for count in 0..=8usize {
                let colors = vec![None; count];
                let board = board_with_neighbors(alive, &colors);
                let (next, _) = step(&board);

                let expected = (alive && (count == 2 || count == 3)) || (!alive && count == 3);
                assert_eq!(
                    next.get(CENTER.0, CENTER.1).unwrap().alive,
                    expected,
                    "alive={alive} count={count}"
                );
            }
        }
    }

    #[test]
    fn newborn_takes_majority_neighbor_color() {
        let board = board_with_neighbors(
            false,
            &[Some(Color::Red), Some(Color::Blue), Some(Color::Red)],
        );
        let (next, _) = step(&board);
        assert_eq!(
            next.get(CENTER.0, CENTER.1).unwrap(),
            Cell::alive(Some(Color::Red))
        );
    }

    #[test]
    fn color_tie_breaks_to_first_seen() {
        let board = board_with_neighbors(
            false,
            &[Some(Color::Red), Some(Color::Blue), Some(Color::Green)],
        );
        let (next, _) = step(&board);
        assert_eq!(
            next.get(CENTER.0, CENTER.1).unwrap(),
            Cell::alive(Some(Color::Red))
        );
    }

    #[test]
    fn survivor_with_two_neighbors_is_recolored() {
        let board = board_with_neighbors(true, &[Some(Color::Green), Some(Color::Green)]);
        let (next, _) = step(&board);
        // Center was Black; two Green neighbors force the recolor.
        assert_eq!(
            next.get(CENTER.0, CENTER.1).unwrap(),
            Cell::alive(Some(Color::Green))
        );
    }

    #[test]
    fn newborn_among_colorless_neighbors_stays_colorless() {
        let board = board_with_neighbors(false, &[None, None, None]);
        let (next, _) = step(&board);
        assert_eq!(next.get(CENTER.0, CENTER.1).unwrap(), Cell::alive(None));
    }

    #[test]
    fn dying_cell_loses_its_color() {
        // Lone live cell: zero neighbors, dies.
        let board = board_with_neighbors(true, &[]);
        let (next, changes) = step(&board);
        assert_eq!(next.get(CENTER.0, CENTER.1).unwrap(), Cell::dead());
        assert!(changes
            .iter()
            .any(|c| (c.x, c.y) == CENTER && c.cell == Cell::dead()));
    }

    #[test]
    fn blinker_oscillates_with_period_two() {
        let mut board = Board::new();
        for y in [5, 6, 7] {
            board.set(5, y, Cell::alive(Some(Color::Blue))).unwrap();
        }

        let (vertical, _) = step(&board);
        let alive: Vec<_> = vertical
            .iter()
            .filter(|(_, _, c)| c.alive)
            .map(|(x, y, _)| (x, y))
            .collect();
        assert_eq!(alive, vec![(4, 6), (5, 6), (6, 6)]);
        for (x, y) in alive {
            assert_eq!(vertical.get(x, y).unwrap().color, Some(Color::Blue));
        }

        let (horizontal, _) = step(&vertical);
        let alive: Vec<_> = horizontal
            .iter()
            .filter(|(_, _, c)| c.alive)
            .map(|(x, y, _)| (x, y))
            .collect();
        assert_eq!(alive, vec![(5, 5), (5, 6), (5, 7)]);
    }

    #[test]
    fn changes_reproduce_the_next_board() {
        let board = crate::seed();
        let (next, changes) = step(&board);

        let mut replayed = board.clone();
        replayed.apply(&changes).unwrap();
        assert_eq!(replayed, next);

        // Cells absent from the change list are identical across generations.
        for (x, y, cell) in board.iter() {
            if !changes.iter().any(|c| c.x == x && c.y == y) {
                assert_eq!(next.get(x, y).unwrap(), cell);
            }
        }
    }

    #[test]
    fn stable_block_produces_empty_diff() {
        let mut board = Board::new();
        for (x, y) in [(10, 10), (10, 11), (11, 10), (11, 11)] {
            board.set(x, y, Cell::alive(Some(Color::Purple))).unwrap();
        }
        let (next, changes) = step(&board);
        assert_eq!(next, board);
        assert!(changes.is_empty());
    }

    fn arb_color() -> impl Strategy<Value = Color> {
        prop_oneof![
            Just(Color::Blue),
            Just(Color::Green),
            Just(Color::Orange),
            Just(Color::Purple),
            Just(Color::Red),
            Just(Color::Black),
        ]
    }

    fn arb_board() -> impl Strategy<Value = Board> {
        proptest::collection::vec(
            (any::<bool>(), proptest::option::of(arb_color())),
            GRID_SIZE * GRID_SIZE,
        )
        .prop_map(|cells| {
            let mut board = Board::new();
            for (i, (alive, color)) in cells.into_iter().enumerate() {
                let cell = if alive {
                    Cell::alive(color)
                } else {
                    Cell::dead()
                };
                *board.at_mut(i / GRID_SIZE, i % GRID_SIZE) = cell;
            }
            board
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn diff_soundness_on_random_boards(board in arb_board()) {
            let (next, changes) = step(&board);
            let mut replayed = board.clone();
            replayed.apply(&changes).unwrap();
            prop_assert_eq!(replayed, next);
        }
    }
}
