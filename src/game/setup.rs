use crate::error::SetupError;

/// Smallest allowed number of rows or columns.
pub const MIN_DIMENSION: usize = 5;
/// Largest allowed number of rows or columns.
pub const MAX_DIMENSION: usize = 9;

/// Everything needed to start a series.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesSetup {
    pub player_names: [String; 2],
    pub rows: usize,
    pub columns: usize,
    pub games: usize,
}

impl SeriesSetup {
    pub fn validate(&self) -> Result<(), SetupError> {
        check_dimension("rows", self.rows)?;
        check_dimension("columns", self.columns)?;
        if self.games == 0 {
            return Err(SetupError::InvalidGameCount(self.games));
        }
        for (i, name) in self.player_names.iter().enumerate() {
            if name.trim().is_empty() {
                return Err(SetupError::EmptyName(i + 1));
            }
        }
        Ok(())
    }
}

impl Default for SeriesSetup {
    fn default() -> Self {
        SeriesSetup {
            player_names: ["Player 1".to_string(), "Player 2".to_string()],
            rows: 6,
            columns: 7,
            games: 1,
        }
    }
}

/// Range check shared with config validation and the console prompts.
pub fn check_dimension(name: &'static str, value: usize) -> Result<(), SetupError> {
    if (MIN_DIMENSION..=MAX_DIMENSION).contains(&value) {
        Ok(())
    } else {
        Err(SetupError::InvalidDimension {
            name,
            value,
            min: MIN_DIMENSION,
            max: MAX_DIMENSION,
        })
    }
}
