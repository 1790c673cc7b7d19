use crossterm::style::{Color, Stylize};

use crate::game::{Board, Cell};

fn cell_symbol(cell: Cell, color: bool) -> String {
    let (plain, fancy, fg) = match cell {
        Cell::Empty => (".", ".", Color::DarkGrey),
        Cell::Red => ("X", "\u{25cf}", Color::Red),
        Cell::Yellow => ("O", "\u{25cf}", Color::Yellow),
    };
    if color {
        fancy.with(fg).to_string()
    } else {
        plain.to_string()
    }
}

/// Render the board top row first, with column numbers above and a base below.
///
/// ```text
///  1 2 3 4 5
/// |. . . . .|
/// |. X . . .|
/// |O X . . .|
/// +---------+
/// ```
pub fn render_board(board: &Board, color: bool) -> String {
    let columns = board.columns();
    let mut out = String::new();

    let header: Vec<String> = (1..=columns).map(|c| c.to_string()).collect();
    out.push(' ');
    out.push_str(&header.join(" "));
    out.push('\n');

    for row in (0..board.rows()).rev() {
        let symbols: Vec<String> = (0..columns)
            .map(|col| {
                // Coordinates come from the board's own dimensions.
                let cell = board.cell_at(col, row).unwrap_or(Cell::Empty);
                cell_symbol(cell, color)
            })
            .collect();
        out.push('|');
        out.push_str(&symbols.join(" "));
        out.push_str("|\n");
    }

    out.push('+');
    out.push_str(&"-".repeat((2 * columns).saturating_sub(1)));
    out.push_str("+\n");
    out
}
