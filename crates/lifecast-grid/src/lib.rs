//! Lifecast Grid
//!
//! The pure half of the lifecast simulation: a fixed 50x50 board of cells,
//! the Game of Life transition rule with color inheritance, and the seed
//! pattern the board resets to.
//!
//! # Rule
//!
//! Liveness is standard B3/S23 with neighbor counts clipped at the board
//! edges (no wraparound). The extension: a cell that comes alive, or that
//! survives with two or more alive neighbors, takes the most frequent color
//! among its alive neighbors; ties go to the color encountered first in the
//! fixed neighbor scan order.
//!
//! # Diffs
//!
//! [`step`] returns both the next board and the minimal list of
//! [`CellChange`]s between the two generations, so consumers can relay
//! deltas instead of full snapshots.

mod board;
mod cell;
mod patterns;
mod step;

pub use board::{Board, CellChange, Error, Result};
pub use cell::{Cell, Color, TOGGLE_PALETTE};
pub use patterns::seed;
pub use step::step;

/// Board dimension. The board is always `GRID_SIZE` x `GRID_SIZE`.
pub const GRID_SIZE: usize = 50;
