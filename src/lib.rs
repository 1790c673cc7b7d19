//! # Connect Four
//!
//! Two-player Connect Four on a configurable 5-9 by 5-9 board, played over a
//! text console. Players drop discs into columns, four in a line wins, and a
//! series of games is scored 2 points per win and 1 point each per draw.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, win detection, players, match controller
//! - [`ui`] — Console input/output collaborators and board rendering
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
