//! Core Connect Four logic: the gravity board, anchored win detection, players,
//! and the controller that runs turns, games, and scored series.

mod board;
mod collaborators;
mod controller;
mod player;
mod setup;
mod state;
pub mod win;

pub use board::{Board, Cell};
pub use collaborators::{MatchReporter, MoveCommand, MoveInput};
pub use controller::{MatchController, SeriesSummary, DRAW_POINTS, WIN_POINTS};
pub use player::{Disc, Player};
pub use setup::{check_dimension, SeriesSetup, MAX_DIMENSION, MIN_DIMENSION};
pub use state::{GameOutcome, MatchState, Position, TurnOutcome};
pub use win::WIN_LENGTH;
