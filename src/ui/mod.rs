//! Text console front end: board rendering plus the line-based input and
//! output collaborators the match controller talks to.

pub mod board_text;
mod console;

pub use board_text::render_board;
pub use console::{parse_move, ConsoleInput, ConsoleOutput};
