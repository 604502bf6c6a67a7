//! The board: a bounds-checked 50x50 cell matrix.

use thiserror::Error;

use crate::cell::Cell;
use crate::GRID_SIZE;

/// Result type for board operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in board operations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A coordinate fell outside `[0, GRID_SIZE)`.
    #[error("coordinates ({x}, {y}) outside the {size}x{size} board", size = GRID_SIZE)]
    OutOfRange { x: usize, y: usize },
}

/// A cell's new value at one position, as produced by [`crate::step`] and
/// consumed by [`Board::apply`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellChange {
    pub x: usize,
    pub y: usize,
    pub cell: Cell,
}

/// The 50x50 cell matrix, indexed `(x, y)` with x as the row.
///
/// Storage is a flat row-major vector; `Clone` is the deep-copy snapshot
/// operation, so holders of a clone never observe later mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: Vec<Cell>,
}

impl Board {
    /// An all-dead board.
    pub fn new() -> Self {
        Self {
            cells: vec![Cell::dead(); GRID_SIZE * GRID_SIZE],
        }
    }

    /// Read the cell at `(x, y)`.
    pub fn get(&self, x: usize, y: usize) -> Result<Cell> {
        self.index(x, y).map(|i| self.cells[i])
    }

    /// Write the cell at `(x, y)`.
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) -> Result<()> {
        let i = self.index(x, y)?;
        self.cells[i] = cell;
        Ok(())
    }

    /// Apply a list of changes in order. Each change simply overwrites the
    /// target cell, so re-applying the same list is idempotent.
    pub fn apply(&mut self, changes: &[CellChange]) -> Result<()> {
        for change in changes {
            self.set(change.x, change.y, change.cell)?;
        }
        Ok(())
    }

    /// Iterate all cells with their coordinates, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &cell)| (i / GRID_SIZE, i % GRID_SIZE, cell))
    }

    /// Count of alive cells.
    pub fn alive_count(&self) -> usize {
        self.cells.iter().filter(|c| c.alive).count()
    }

    /// Unchecked read for internal loops that iterate `[0, GRID_SIZE)`.
    pub(crate) fn at(&self, x: usize, y: usize) -> Cell {
        self.cells[x * GRID_SIZE + y]
    }

    /// Unchecked write counterpart of [`Board::at`].
    pub(crate) fn at_mut(&mut self, x: usize, y: usize) -> &mut Cell {
        &mut self.cells[x * GRID_SIZE + y]
    }

    fn index(&self, x: usize, y: usize) -> Result<usize> {
        if x >= GRID_SIZE || y >= GRID_SIZE {
            return Err(Error::OutOfRange { x, y });
        }
        Ok(x * GRID_SIZE + y)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

// The wire shape is a nested Cell[][] array, not the flat storage, so
// Serialize/Deserialize are written out by hand.
#[cfg(feature = "serde")]
mod serde_impl {
    use serde::de::Error as _;
    use serde::ser::SerializeSeq;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::{Board, Cell, GRID_SIZE};

    impl Serialize for Board {
        fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
            let mut rows = serializer.serialize_seq(Some(GRID_SIZE))?;
            for row in self.cells.chunks(GRID_SIZE) {
                rows.serialize_element(row)?;
            }
            rows.end()
        }
    }

    impl<'de> Deserialize<'de> for Board {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
            let rows: Vec<Vec<Cell>> = Vec::deserialize(deserializer)?;
            if rows.len() != GRID_SIZE || rows.iter().any(|r| r.len() != GRID_SIZE) {
                return Err(D::Error::custom(format!(
                    "board must be {size}x{size}",
                    size = GRID_SIZE
                )));
            }
            Ok(Board {
                cells: rows.into_iter().flatten().collect(),
            })
        }
    }
}
