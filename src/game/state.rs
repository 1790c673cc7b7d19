/// A 0-based board coordinate; row 0 is the bottom row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub column: usize,
    pub row: usize,
}

impl Position {
    /// Step by a signed offset, or `None` if either coordinate would go negative.
    pub fn offset(self, dc: isize, dr: isize) -> Option<Position> {
        Some(Position {
            column: self.column.checked_add_signed(dc)?,
            row: self.row.checked_add_signed(dr)?,
        })
    }
}

/// How a finished game ended. Players are referred to by index (0 or 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(usize),
    Draw,
}

/// Result of applying one accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    Continue,
    GameOver(GameOutcome),
}

/// Per-game bookkeeping, reinitialized at the start of every game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchState {
    pub last_move: Option<Position>,
    /// Set once the game is decided; doubles as the game-over flag.
    pub outcome: Option<GameOutcome>,
    pub forced_end: bool,
    /// 1-based index of the game within the series.
    pub game_index: usize,
    pub active_player: usize,
}

impl MatchState {
    /// Fresh state for the given game; player 1 always opens.
    pub fn new(game_index: usize) -> Self {
        MatchState {
            last_move: None,
            outcome: None,
            forced_end: false,
            game_index,
            active_player: 0,
        }
    }

    pub fn rotate(&mut self) {
        self.active_player = (self.active_player + 1) % 2;
    }

    pub fn is_game_over(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn is_finished(&self) -> bool {
        self.is_game_over() || self.forced_end
    }
}
