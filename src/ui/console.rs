use std::fmt::Display;
use std::io::{BufRead, Write};

use tracing::warn;

use super::board_text::render_board;
use crate::error::{InputError, InvalidInput, MoveError, SetupError};
use crate::game::{check_dimension, Board, MatchReporter, MoveCommand, MoveInput, Player, SeriesSetup};

/// Words that end the series instead of choosing a column.
const QUIT_WORDS: [&str; 3] = ["q", "quit", "exit"];

/// Parse one line of move input.
pub fn parse_move(line: &str, columns: usize) -> Result<MoveCommand, InvalidInput> {
    let line = line.trim();
    if QUIT_WORDS.iter().any(|w| line.eq_ignore_ascii_case(w)) {
        return Ok(MoveCommand::ForcedEnd);
    }
    let value: usize = line
        .parse()
        .map_err(|_| InvalidInput::NotANumber(line.to_string()))?;
    if value == 0 || value > columns {
        return Err(InvalidInput::OutOfRange {
            value,
            min: 1,
            max: columns,
        });
    }
    Ok(MoveCommand::Column(value))
}

fn parse_number(line: &str) -> Result<usize, InvalidInput> {
    line.parse()
        .map_err(|_| InvalidInput::NotANumber(line.to_string()))
}

fn parse_dimension(name: &'static str, line: &str) -> Result<usize, InvalidInput> {
    let value = parse_number(line)?;
    check_dimension(name, value)?;
    Ok(value)
}

fn parse_games(line: &str) -> Result<usize, InvalidInput> {
    match parse_number(line)? {
        0 => Err(SetupError::InvalidGameCount(0).into()),
        n => Ok(n),
    }
}

/// Line-oriented input: prompts on `writer`, reads answers from `reader`, and
/// re-prompts until each answer is well formed.
pub struct ConsoleInput<R, W> {
    reader: R,
    writer: W,
    defaults: SeriesSetup,
}

impl<R: BufRead, W: Write> ConsoleInput<R, W> {
    /// `defaults` are offered at each setup prompt and taken on an empty line.
    pub fn new(reader: R, writer: W, defaults: SeriesSetup) -> Self {
        ConsoleInput {
            reader,
            writer,
            defaults,
        }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Show `text` and read one line, without its line ending. `None` on EOF.
    ///
    /// Bytes that are not UTF-8 become replacement characters, which then fail
    /// to parse like any other bad answer.
    fn prompt(&mut self, text: &str) -> Result<Option<String>, InputError> {
        write!(self.writer, "{text}")?;
        self.writer.flush()?;

        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&buf).trim().to_string()))
    }

    fn ask<T, F>(&mut self, label: &str, default: T, parse: F) -> Result<T, InputError>
    where
        T: Display,
        F: Fn(&str) -> Result<T, InvalidInput>,
    {
        loop {
            let line = self
                .prompt(&format!("{label} [{default}]: "))?
                .ok_or(InputError::Closed)?;
            if line.is_empty() {
                return Ok(default);
            }
            match parse(&line) {
                Ok(value) => return Ok(value),
                Err(err) => writeln!(self.writer, "Invalid input: {err}.")?,
            }
        }
    }
}

impl<R: BufRead, W: Write> MoveInput for ConsoleInput<R, W> {
    fn request_series_setup(&mut self) -> Result<SeriesSetup, InputError> {
        let defaults = self.defaults.clone();
        let [first, second] = defaults.player_names;

        let first = self.ask("Name of player 1", first, |s| Ok(s.to_string()))?;
        let second = self.ask("Name of player 2", second, |s| Ok(s.to_string()))?;
        let rows = self.ask("Rows (5-9)", defaults.rows, |s| parse_dimension("rows", s))?;
        let columns = self.ask("Columns (5-9)", defaults.columns, |s| {
            parse_dimension("columns", s)
        })?;
        let games = self.ask("Number of games", defaults.games, parse_games)?;

        Ok(SeriesSetup {
            player_names: [first, second],
            rows,
            columns,
            games,
        })
    }

    fn request_move(&mut self, player_name: &str, columns: usize) -> Result<MoveCommand, InputError> {
        let text = format!("{player_name}, choose a column (1-{columns}) or 'q' to quit: ");
        loop {
            let Some(line) = self.prompt(&text)? else {
                // Closing the input is the same as asking to stop.
                writeln!(self.writer)?;
                return Ok(MoveCommand::ForcedEnd);
            };
            match parse_move(&line, columns) {
                Ok(command) => return Ok(command),
                Err(err) => writeln!(self.writer, "Invalid input: {err}.")?,
            }
        }
    }
}

/// Writes game output as plain text. Write failures are logged and dropped.
pub struct ConsoleOutput<W> {
    writer: W,
    color: bool,
}

impl<W: Write> ConsoleOutput<W> {
    pub fn new(writer: W, color: bool) -> Self {
        ConsoleOutput { writer, color }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn emit(&mut self, text: &str) {
        if let Err(err) = writeln!(self.writer, "{text}").and_then(|_| self.writer.flush()) {
            warn!(%err, "failed to write game output");
        }
    }
}

impl<W: Write> MatchReporter for ConsoleOutput<W> {
    fn report_game_start(&mut self, game_index: usize, game_count: usize) {
        if game_count > 1 {
            self.emit(&format!("\n=== Game {game_index} of {game_count} ==="));
        } else {
            self.emit("\n=== New game ===");
        }
    }

    fn report_board(&mut self, board: &Board) {
        let text = render_board(board, self.color);
        self.emit(text.trim_end());
    }

    fn report_turn_prompt(&mut self, player_name: &str) {
        self.emit(&format!("{player_name}'s turn."));
    }

    fn report_invalid_move(&mut self, reason: &MoveError) {
        self.emit(&format!("Invalid move: {reason}. Try again."));
    }

    fn report_game_result(&mut self, winner: Option<&str>) {
        match winner {
            Some(name) => self.emit(&format!("{name} wins!")),
            None => self.emit("It's a draw!"),
        }
    }

    fn report_scores(&mut self, first: &Player, second: &Player) {
        self.emit(&format!(
            "Score: {} {} - {} {}",
            first.name(),
            first.points(),
            second.points(),
            second.name()
        ));
    }

    fn report_series_end(&mut self) {
        self.emit("Series over. Thanks for playing!");
    }
}
