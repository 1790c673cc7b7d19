use super::player::Disc;
use crate::error::{BoardError, MoveError};

/// Contents of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Red,
    Yellow,
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// A `rows x columns` grid that fills bottom-up.
///
/// Cells are stored row-major with row 0 at the bottom, so a drop lands at the
/// lowest empty row index of its column. Dimensions are checked by
/// [`SeriesSetup`](super::SeriesSetup) before a board is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    columns: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board
    pub fn new(rows: usize, columns: usize) -> Self {
        Board {
            rows,
            columns,
            cells: vec![Cell::Empty; rows * columns],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Read a cell by 0-based column and row (row 0 is the bottom).
    pub fn cell_at(&self, column: usize, row: usize) -> Result<Cell, BoardError> {
        if column >= self.columns || row >= self.rows {
            return Err(BoardError::OutOfBounds { column, row });
        }
        Ok(self.cells[self.index(column, row)])
    }

    /// Drop a disc into a 1-based column, returning the 0-based row it landed in.
    ///
    /// A full column is left untouched.
    pub fn drop_disc(&mut self, column: usize, disc: Disc) -> Result<usize, MoveError> {
        if column == 0 || column > self.columns {
            return Err(MoveError::InvalidColumn {
                column,
                columns: self.columns,
            });
        }

        if self.is_column_full(column) {
            return Err(MoveError::ColumnFull(column));
        }

        let col = column - 1;
        let row = (0..self.rows)
            .find(|&row| self.cells[self.index(col, row)].is_empty())
            .ok_or(MoveError::ColumnFull(column))?;

        let idx = self.index(col, row);
        self.cells[idx] = disc.to_cell();
        Ok(row)
    }

    /// Check if a 1-based column has no room left
    pub fn is_column_full(&self, column: usize) -> bool {
        if column == 0 || column > self.columns || self.rows == 0 {
            return true;
        }
        // Gravity keeps the top cell the last one to fill.
        !self.cells[self.index(column - 1, self.rows - 1)].is_empty()
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Empty every cell
    pub fn reset(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    fn index(&self, column: usize, row: usize) -> usize {
        row * self.columns + column
    }
}
