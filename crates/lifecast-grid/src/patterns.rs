//! The fixed seed pattern the board starts from and resets to.

use crate::board::Board;
use crate::cell::{Cell, Color};
use crate::GRID_SIZE;

/// Alive coordinates of the seed pattern, `(x, y)` with x as the row.
const SEED_CELLS: &[(usize, usize)] = &[
    (4, 12),
    (4, 44),
    (5, 11),
    (5, 13),
    (5, 43),
    (5, 44),
    (5, 45),
    (6, 11),
    (6, 13),
    (6, 44),
    (7, 12),
    (9, 7),
    (9, 8),
    (9, 16),
    (9, 17),
    (9, 18),
    (10, 6),
    (10, 12),
    (10, 17),
    (10, 23),
    (11, 6),
    (11, 10),
    (11, 12),
    (11, 17),
    (11, 22),
    (11, 23),
    (12, 6),
    (12, 10),
    (12, 12),
    (12, 17),
    (12, 22),
    (12, 23),
    (13, 7),
    (13, 8),
    (13, 16),
    (13, 17),
    (13, 18),
    (15, 16),
    (15, 17),
    (16, 15),
    (16, 16),
    (16, 17),
    (17, 15),
    (17, 16),
    (17, 17),
    (18, 24),
    (19, 11),
    (19, 12),
    (19, 23),
    (20, 24),
    (20, 25),
    (22, 2),
    (23, 2),
    (24, 1),
    (24, 3),
    (24, 31),
    (24, 32),
    (25, 1),
    (26, 0),
    (26, 4),
    (26, 25),
    (27, 0),
    (27, 25),
    (27, 32),
    (28, 4),
    (28, 24),
    (28, 30),
    (28, 31),
    (29, 24),
    (29, 30),
    (29, 31),
    (30, 4),
    (30, 24),
    (30, 30),
    (30, 31),
    (31, 24),
    (31, 30),
    (31, 31),
    (33, 17),
    (34, 16),
    (34, 17),
    (35, 16),
    (35, 17),
    (36, 17),
    (38, 22),
    (38, 23),
    (39, 22),
    (39, 23),
    (39, 31),
    (40, 22),
    (40, 23),
    (40, 30),
    (40, 32),
    (41, 30),
    (41, 32),
    (43, 31),
    (44, 31),
    (45, 30),
    (45, 32),
    (46, 22),
    (46, 23),
    (46, 30),
    (46, 32),
    (47, 22),
    (47, 23),
    (47, 31),
];

/// Color of a seed cell, by the first matching region predicate over its
/// row. Priority order matters: a coordinate can satisfy none of them
/// (e.g. green's y-bound fails) and falls back to black.
fn region_color(x: usize, y: usize) -> Color {
    if x < 8 {
        Color::Blue
    } else if (9..14).contains(&x) && y < 15 {
        Color::Green
    } else if (15..21).contains(&x) {
        Color::Orange
    } else if (22..32).contains(&x) {
        Color::Purple
    } else if x >= 33 {
        Color::Red
    } else {
        Color::Black
    }
}

/// Build the seed board: all dead, then the fixed table marked alive with
/// region colors. Out-of-range table entries are skipped. Deterministic.
pub fn seed() -> Board {
    let mut board = Board::new();
    for &(x, y) in SEED_CELLS {
        if x < GRID_SIZE && y < GRID_SIZE {
            *board.at_mut(x, y) = Cell::alive(Some(region_color(x, y)));
        }
    }
    board
}
