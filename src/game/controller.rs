use tracing::{debug, info};

use super::collaborators::{MatchReporter, MoveCommand, MoveInput};
use super::state::{GameOutcome, MatchState, Position, TurnOutcome};
use super::win::is_winning_move;
use super::{Board, Disc, Player, SeriesSetup};
use crate::error::{InputError, MoveError, SetupError};

/// Points for winning a game.
pub const WIN_POINTS: u32 = 2;
/// Points each player gets for a drawn game.
pub const DRAW_POINTS: u32 = 1;

/// Final tally of a series.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesSummary {
    pub scores: [u32; 2],
    /// Games that reached a result; a force-ended game is not counted.
    pub games_played: usize,
    pub forced_end: bool,
}

/// Owns the board and both players, and drives turns, games, and the series.
#[derive(Debug, Clone)]
pub struct MatchController {
    board: Board,
    players: [Player; 2],
    state: MatchState,
    game_count: usize,
}

impl MatchController {
    pub fn new(setup: SeriesSetup) -> Result<Self, SetupError> {
        setup.validate()?;
        let [first, second] = setup.player_names;
        Ok(MatchController {
            board: Board::new(setup.rows, setup.columns),
            players: [Player::new(first, Disc::Red), Player::new(second, Disc::Yellow)],
            state: MatchState::new(1),
            game_count: setup.games,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    pub fn game_count(&self) -> usize {
        self.game_count
    }

    pub fn active_player(&self) -> &Player {
        &self.players[self.state.active_player]
    }

    pub fn scores(&self) -> [u32; 2] {
        [self.players[0].points(), self.players[1].points()]
    }

    /// Apply the active player's drop, score it, and pass the turn.
    ///
    /// A rejected drop changes nothing and leaves the same player to move.
    pub fn play_move(&mut self, column: usize) -> Result<TurnOutcome, MoveError> {
        if self.state.is_finished() {
            return Err(MoveError::GameOver);
        }

        let mover = self.state.active_player;
        let row = self.board.drop_disc(column, self.players[mover].disc())?;
        let at = Position {
            column: column - 1,
            row,
        };
        self.state.last_move = Some(at);
        debug!(
            player = %self.players[mover].name(),
            disc = self.players[mover].disc().name(),
            column,
            row,
            "disc dropped"
        );

        // A move that fills the board and completes a line is a win.
        let outcome = if is_winning_move(&self.board, at) {
            self.players[mover].award(WIN_POINTS);
            Some(GameOutcome::Winner(mover))
        } else if self.board.is_full() {
            for player in &mut self.players {
                player.award(DRAW_POINTS);
            }
            Some(GameOutcome::Draw)
        } else {
            None
        };

        self.state.outcome = outcome;
        self.state.rotate();

        Ok(match outcome {
            Some(outcome) => TurnOutcome::GameOver(outcome),
            None => TurnOutcome::Continue,
        })
    }

    /// Abandon the current game; nothing is scored.
    pub fn force_end(&mut self) {
        info!(game = self.state.game_index, "series ended by player");
        self.state.forced_end = true;
    }

    /// Clear the board and per-game state for the next game. Points are kept.
    pub fn start_next_game(&mut self) {
        self.board.reset();
        self.state = MatchState::new(self.state.game_index + 1);
    }

    /// Play turns until the current game is decided or force-ended.
    ///
    /// Returns `None` when the game was force-ended.
    pub fn play_game<I, R>(
        &mut self,
        input: &mut I,
        output: &mut R,
    ) -> Result<Option<GameOutcome>, InputError>
    where
        I: MoveInput + ?Sized,
        R: MatchReporter + ?Sized,
    {
        output.report_board(&self.board);

        while !self.state.is_finished() {
            let name = self.active_player().name().to_string();
            output.report_turn_prompt(&name);

            let column = match input.request_move(&name, self.board.columns())? {
                MoveCommand::ForcedEnd => {
                    self.force_end();
                    return Ok(None);
                }
                MoveCommand::Column(column) => column,
            };

            match self.play_move(column) {
                Ok(TurnOutcome::Continue) => output.report_board(&self.board),
                Ok(TurnOutcome::GameOver(outcome)) => {
                    output.report_board(&self.board);
                    self.report_outcome(outcome, output);
                    return Ok(Some(outcome));
                }
                Err(err) => {
                    debug!(player = %name, column, %err, "move rejected");
                    output.report_invalid_move(&err);
                }
            }
        }

        Ok(self.state.outcome)
    }

    /// Play every configured game, stopping early on a forced end.
    pub fn run_series<I, R>(&mut self, input: &mut I, output: &mut R) -> Result<SeriesSummary, InputError>
    where
        I: MoveInput + ?Sized,
        R: MatchReporter + ?Sized,
    {
        let game_count = self.game_count();
        info!(
            games = game_count,
            rows = self.board.rows(),
            columns = self.board.columns(),
            "series started"
        );

        let mut games_played = 0;
        for game in 1..=game_count {
            if game > 1 {
                self.start_next_game();
            }
            output.report_game_start(game, game_count);

            if self.play_game(input, output)?.is_none() {
                break;
            }
            games_played += 1;

            if game_count > 1 {
                output.report_scores(&self.players[0], &self.players[1]);
            }
        }

        output.report_series_end();

        let summary = SeriesSummary {
            scores: self.scores(),
            games_played,
            forced_end: self.state.forced_end,
        };
        info!(
            first = summary.scores[0],
            second = summary.scores[1],
            games_played,
            forced_end = summary.forced_end,
            "series finished"
        );
        Ok(summary)
    }

    fn report_outcome<R: MatchReporter + ?Sized>(&self, outcome: GameOutcome, output: &mut R) {
        match outcome {
            GameOutcome::Winner(index) => {
                let winner = self.players[index].name();
                info!(game = self.state.game_index, winner, "game won");
                output.report_game_result(Some(winner));
            }
            GameOutcome::Draw => {
                info!(game = self.state.game_index, "game drawn");
                output.report_game_result(None);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use super::*;
    use crate::game::Cell;

    const DRAW_6X7: [usize; 42] = [
        6, 2, 3, 7, 6, 7, 2, 5, 3, 7, 4, 3, 3, 6, 7, 5, 5, 5, 5, 6, 5, 6, 4, 3, 7, 2, 4, 7, 3,
        4, 1, 2, 6, 1, 1, 1, 1, 1, 4, 2, 2, 4,
    ];

    /// The 25th move fills the 5x5 board and completes a line for Red.
    const FULL_BOARD_WIN_5X5: [usize; 25] = [
        2, 3, 1, 1, 2, 4, 2, 3, 5, 3, 5, 5, 4, 5, 3, 3, 5, 1, 4, 4, 1, 4, 1, 2, 2,
    ];

    struct ScriptedInput {
        setup: SeriesSetup,
        moves: VecDeque<MoveCommand>,
        requested_by: Vec<String>,
    }

    impl ScriptedInput {
        fn new(moves: impl IntoIterator<Item = MoveCommand>) -> Self {
            ScriptedInput {
                setup: setup(6, 7, 1),
                moves: moves.into_iter().collect(),
                requested_by: Vec::new(),
            }
        }

        fn columns(columns: &[usize]) -> Self {
            Self::new(columns.iter().map(|&c| MoveCommand::Column(c)))
        }
    }

    impl MoveInput for ScriptedInput {
        fn request_series_setup(&mut self) -> Result<SeriesSetup, InputError> {
            Ok(self.setup.clone())
        }

        fn request_move(&mut self, player_name: &str, _columns: usize) -> Result<MoveCommand, InputError> {
            self.requested_by.push(player_name.to_string());
            self.moves.pop_front().ok_or(InputError::Closed)
        }
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Event {
        GameStart(usize),
        Board,
        Prompt(String),
        Invalid(MoveError),
        Result(Option<String>),
        Scores(u32, u32),
        SeriesEnd,
    }

    #[derive(Default)]
    struct Recorder {
        events: Vec<Event>,
    }

    impl Recorder {
        fn results(&self) -> Vec<Option<String>> {
            self.events
                .iter()
                .filter_map(|e| match e {
                    Event::Result(r) => Some(r.clone()),
                    _ => None,
                })
                .collect()
        }

        fn scores(&self) -> Vec<(u32, u32)> {
            self.events
                .iter()
                .filter_map(|e| match e {
                    Event::Scores(a, b) => Some((*a, *b)),
                    _ => None,
                })
                .collect()
        }
    }

    impl MatchReporter for Recorder {
        fn report_game_start(&mut self, game_index: usize, _game_count: usize) {
            self.events.push(Event::GameStart(game_index));
        }

        fn report_board(&mut self, _board: &Board) {
            self.events.push(Event::Board);
        }

        fn report_turn_prompt(&mut self, player_name: &str) {
            self.events.push(Event::Prompt(player_name.to_string()));
        }

        fn report_invalid_move(&mut self, reason: &MoveError) {
            self.events.push(Event::Invalid(reason.clone()));
        }

        fn report_game_result(&mut self, winner: Option<&str>) {
            self.events.push(Event::Result(winner.map(str::to_string)));
        }

        fn report_scores(&mut self, first: &Player, second: &Player) {
            self.events.push(Event::Scores(first.points(), second.points()));
        }

        fn report_series_end(&mut self) {
            self.events.push(Event::SeriesEnd);
        }
    }

    fn setup(rows: usize, columns: usize, games: usize) -> SeriesSetup {
        SeriesSetup {
            player_names: ["Ada".to_string(), "Bob".to_string()],
            rows,
            columns,
            games,
        }
    }

    fn controller(rows: usize, columns: usize, games: usize) -> MatchController {
        MatchController::new(setup(rows, columns, games)).unwrap()
    }

    #[test]
    fn test_new_rejects_invalid_setup() {
        assert!(MatchController::new(setup(4, 7, 1)).is_err());
        assert!(MatchController::new(setup(6, 10, 1)).is_err());
        assert!(MatchController::new(setup(6, 7, 0)).is_err());
    }

    #[test]
    fn test_first_player_is_red_and_opens() {
        let ctrl = controller(6, 7, 1);
        assert_eq!(ctrl.active_player().name(), "Ada");
        assert_eq!(ctrl.active_player().disc(), Disc::Red);
        assert_eq!(ctrl.players()[1].disc(), Disc::Yellow);
        assert_eq!(ctrl.game_count(), 1);
    }

    #[test]
    fn test_vertical_win_after_three_stacked() {
        let mut ctrl = controller(6, 7, 1);

        for &col in &[4, 3, 4, 5, 4] {
            assert_eq!(ctrl.play_move(col), Ok(TurnOutcome::Continue));
        }
        assert_eq!(ctrl.board().cell_at(3, 2), Ok(Cell::Red));
        assert_eq!(ctrl.scores(), [0, 0]);

        assert_eq!(ctrl.play_move(1), Ok(TurnOutcome::Continue));
        assert_eq!(
            ctrl.play_move(4),
            Ok(TurnOutcome::GameOver(GameOutcome::Winner(0)))
        );
        assert_eq!(ctrl.scores(), [2, 0]);
        assert_eq!(ctrl.state().last_move, Some(Position { column: 3, row: 3 }));
    }

    #[test]
    fn test_rotation_happens_on_terminal_move() {
        let mut ctrl = controller(6, 7, 1);
        for &col in &[1, 2, 1, 2, 1, 2, 1] {
            ctrl.play_move(col).unwrap();
        }
        assert!(ctrl.state().is_game_over());
        assert_eq!(ctrl.state().active_player, 1);
        assert_eq!(ctrl.play_move(3), Err(MoveError::GameOver));
    }

    #[test]
    fn test_full_column_keeps_turn() {
        let mut ctrl = controller(5, 5, 1);
        for _ in 0..5 {
            ctrl.play_move(1).unwrap();
        }
        let before = ctrl.board().clone();

        assert_eq!(ctrl.active_player().name(), "Bob");
        assert_eq!(ctrl.play_move(1), Err(MoveError::ColumnFull(1)));
        assert_eq!(ctrl.active_player().name(), "Bob");
        assert_eq!(ctrl.board(), &before);
    }

    #[test]
    fn test_draw_awards_one_point_each() {
        let mut ctrl = controller(6, 7, 1);
        let (last, rest) = DRAW_6X7.split_last().unwrap();
        for &col in rest {
            assert_eq!(ctrl.play_move(col), Ok(TurnOutcome::Continue));
        }
        assert_eq!(
            ctrl.play_move(*last),
            Ok(TurnOutcome::GameOver(GameOutcome::Draw))
        );
        assert!(ctrl.board().is_full());
        assert_eq!(ctrl.scores(), [1, 1]);
    }

    #[test]
    fn test_win_on_last_cell_beats_draw() {
        let mut ctrl = controller(5, 5, 1);
        let mut outcome = TurnOutcome::Continue;
        for &col in &FULL_BOARD_WIN_5X5 {
            outcome = ctrl.play_move(col).unwrap();
        }
        assert!(ctrl.board().is_full());
        assert_eq!(outcome, TurnOutcome::GameOver(GameOutcome::Winner(0)));
        assert_eq!(ctrl.scores(), [2, 0]);
    }

    #[test]
    fn test_run_series_reprompts_same_player_on_full_column() {
        let mut ctrl = controller(5, 5, 1);
        let mut input = ScriptedInput::new(
            [1, 1, 1, 1, 1, 1, 2]
                .into_iter()
                .map(MoveCommand::Column)
                .chain([MoveCommand::ForcedEnd]),
        );
        let mut output = Recorder::default();

        let summary = ctrl.run_series(&mut input, &mut output).unwrap();

        assert_eq!(
            input.requested_by,
            ["Ada", "Bob", "Ada", "Bob", "Ada", "Bob", "Bob", "Ada"]
        );
        assert!(output
            .events
            .contains(&Event::Invalid(MoveError::ColumnFull(1))));
        assert!(summary.forced_end);
    }

    #[test]
    fn test_three_game_series_scoring() {
        let mut ctrl = controller(6, 7, 3);
        let mut moves = vec![1, 2, 1, 2, 1, 2, 1];
        moves.extend_from_slice(&DRAW_6X7);
        moves.extend_from_slice(&[1, 2, 1, 2, 1, 2, 3, 2]);
        let mut input = ScriptedInput::columns(&moves);
        let mut output = Recorder::default();

        let summary = ctrl.run_series(&mut input, &mut output).unwrap();

        assert_eq!(
            summary,
            SeriesSummary {
                scores: [3, 3],
                games_played: 3,
                forced_end: false,
            }
        );
        assert_eq!(
            output.results(),
            [Some("Ada".to_string()), None, Some("Bob".to_string())]
        );
        assert_eq!(output.scores(), [(2, 0), (3, 1), (3, 3)]);
        assert_eq!(output.events.last(), Some(&Event::SeriesEnd));
        assert!(input.moves.is_empty());
    }

    #[test]
    fn test_each_game_starts_with_player_one_on_empty_board() {
        let mut ctrl = controller(6, 7, 2);
        // Game 1 ends on Ada's move, so Bob would be next without the reset.
        let mut input = ScriptedInput::new(
            [1, 2, 1, 2, 1, 2, 1]
                .into_iter()
                .map(MoveCommand::Column)
                .chain([MoveCommand::ForcedEnd]),
        );
        let mut output = Recorder::default();

        let summary = ctrl.run_series(&mut input, &mut output).unwrap();

        assert_eq!(input.requested_by.last().map(String::as_str), Some("Ada"));
        assert_eq!(ctrl.state().game_index, 2);
        assert_eq!(ctrl.board(), &Board::new(6, 7));
        assert_eq!(summary.scores, [2, 0]);
        assert_eq!(summary.games_played, 1);
        assert!(output.events.contains(&Event::GameStart(2)));
    }

    #[test]
    fn test_forced_end_skips_scoring_and_remaining_games() {
        let mut ctrl = controller(6, 7, 3);
        let mut input = ScriptedInput::new([
            MoveCommand::Column(4),
            MoveCommand::Column(4),
            MoveCommand::ForcedEnd,
        ]);
        let mut output = Recorder::default();

        let summary = ctrl.run_series(&mut input, &mut output).unwrap();

        assert_eq!(
            summary,
            SeriesSummary {
                scores: [0, 0],
                games_played: 0,
                forced_end: true,
            }
        );
        assert!(output.results().is_empty());
        assert!(output.scores().is_empty());
        assert_eq!(output.events.last(), Some(&Event::SeriesEnd));
        assert!(!output.events.contains(&Event::GameStart(2)));
    }

    #[test]
    fn test_single_game_reports_no_score_line() {
        let mut ctrl = controller(6, 7, 1);
        let mut input = ScriptedInput::columns(&[1, 2, 1, 2, 1, 2, 1]);
        let mut output = Recorder::default();

        let summary = ctrl.run_series(&mut input, &mut output).unwrap();

        assert_eq!(summary.scores, [2, 0]);
        assert!(output.scores().is_empty());
        assert_eq!(output.results(), [Some("Ada".to_string())]);
        assert_eq!(
            &output.events[..3],
            &[Event::GameStart(1), Event::Board, Event::Prompt("Ada".to_string())]
        );
    }

    #[test]
    fn test_closed_input_propagates() {
        let mut ctrl = controller(6, 7, 1);
        let mut input = ScriptedInput::columns(&[1, 2]);
        let mut output = Recorder::default();

        let err = ctrl.run_series(&mut input, &mut output).unwrap_err();
        assert!(matches!(err, InputError::Closed));
    }
}
