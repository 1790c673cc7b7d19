use std::path::PathBuf;

/// Why a disc could not be dropped into a column.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {column} is outside the board (1-{columns})")]
    InvalidColumn { column: usize, columns: usize },

    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("the game is already over")]
    GameOver,
}

/// Errors from reading board cells.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("cell (column {column}, row {row}) is outside the board")]
    OutOfBounds { column: usize, row: usize },
}

/// A series setup that cannot be played.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SetupError {
    #[error("{name} must be between {min} and {max}, got {value}")]
    InvalidDimension {
        name: &'static str,
        value: usize,
        min: usize,
        max: usize,
    },

    #[error("number of games must be at least 1, got {0}")]
    InvalidGameCount(usize),

    #[error("player {0} needs a non-empty name")]
    EmptyName(usize),
}

/// Malformed or out-of-range text from a player. The console re-prompts on
/// these, so they never reach the controller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidInput {
    #[error("'{0}' is not a number")]
    NotANumber(String),

    #[error("{value} is out of range ({min}-{max})")]
    OutOfRange { value: usize, min: usize, max: usize },

    #[error(transparent)]
    Setup(#[from] SetupError),
}

/// Failures of the input side itself, as opposed to bad input from a player.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("input closed before setup was complete")]
    Closed,
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_error_display() {
        assert_eq!(MoveError::ColumnFull(4).to_string(), "column 4 is full");
        let err = MoveError::InvalidColumn {
            column: 9,
            columns: 7,
        };
        assert_eq!(err.to_string(), "column 9 is outside the board (1-7)");
    }

    #[test]
    fn test_setup_error_display() {
        let err = SetupError::InvalidDimension {
            name: "rows",
            value: 4,
            min: 5,
            max: 9,
        };
        assert_eq!(err.to_string(), "rows must be between 5 and 9, got 4");
        assert_eq!(
            SetupError::InvalidGameCount(0).to_string(),
            "number of games must be at least 1, got 0"
        );
    }

    #[test]
    fn test_invalid_input_display() {
        assert_eq!(
            InvalidInput::NotANumber("abc".into()).to_string(),
            "'abc' is not a number"
        );
        let err = InvalidInput::from(SetupError::InvalidGameCount(0));
        assert_eq!(err.to_string(), "number of games must be at least 1, got 0");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("game.rows must be in [5, 9]".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: game.rows must be in [5, 9]"
        );
    }
}
