use super::{Board, Player, SeriesSetup};
use crate::error::{InputError, MoveError};

/// What the active player asked for on their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveCommand {
    /// Abort the whole series immediately, without scoring the current game.
    ForcedEnd,
    /// Drop into this 1-based column.
    Column(usize),
}

/// Source of setup and per-turn decisions.
///
/// Implementations own their own retry loop for malformed input: a returned
/// `Column(n)` is already in `1..=columns`. Whether that column still has room
/// is for the board to decide.
pub trait MoveInput {
    /// Names, board dimensions, and number of games for a new series.
    fn request_series_setup(&mut self) -> Result<SeriesSetup, InputError>;

    /// Block until the named player picks a column or ends the series.
    fn request_move(&mut self, player_name: &str, columns: usize) -> Result<MoveCommand, InputError>;
}

/// Sink for everything the players should see. Calls are fire-and-forget.
pub trait MatchReporter {
    /// A new game is about to start (1-based index).
    fn report_game_start(&mut self, _game_index: usize, _game_count: usize) {}

    fn report_board(&mut self, board: &Board);

    fn report_turn_prompt(&mut self, player_name: &str);

    fn report_invalid_move(&mut self, reason: &MoveError);

    /// `None` means the game was drawn.
    fn report_game_result(&mut self, winner: Option<&str>);

    fn report_scores(&mut self, first: &Player, second: &Player);

    fn report_series_end(&mut self);
}
