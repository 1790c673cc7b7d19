//! Win detection anchored at the most recently placed disc.
//!
//! Any new line of four must pass through the last drop, so each check only
//! walks outward from that cell along the four axes instead of rescanning the
//! whole board.

use super::board::{Board, Cell};
use super::state::Position;

/// Number of aligned discs needed to win.
pub const WIN_LENGTH: usize = 4;

/// One step along each undirected axis: vertical, horizontal, and the two
/// diagonals. The opposite direction is the negated step.
pub const AXES: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Count consecutive `cell`s starting at `from` (inclusive) and stepping by
/// `(dc, dr)` until the board edge or a different cell.
pub fn count_direction(board: &Board, from: Position, cell: Cell, (dc, dr): (isize, isize)) -> usize {
    let mut count = 0;
    let mut current = Some(from);

    while let Some(pos) = current {
        match board.cell_at(pos.column, pos.row) {
            Ok(c) if c == cell => count += 1,
            _ => break,
        }
        current = pos.offset(dc, dr);
    }

    count
}

/// Length of the run of `cell` through `at` along one axis.
pub fn line_length(board: &Board, at: Position, cell: Cell, (dc, dr): (isize, isize)) -> usize {
    let forward = count_direction(board, at, cell, (dc, dr));
    let backward = count_direction(board, at, cell, (-dc, -dr));
    // The anchor cell is counted by both walks.
    (forward + backward).saturating_sub(1)
}

/// Check whether the disc at `at` completes a line of [`WIN_LENGTH`] or more.
pub fn is_winning_move(board: &Board, at: Position) -> bool {
    let cell = match board.cell_at(at.column, at.row) {
        Ok(cell) if !cell.is_empty() => cell,
        _ => return false,
    };

    AXES
        .iter()
        .any(|&axis| line_length(board, at, cell, axis) >= WIN_LENGTH)
}
