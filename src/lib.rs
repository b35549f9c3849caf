//! Engine for a single-player mine-detection puzzle on a square grid.
//!
//! A [`Game`] owns one [`Board`]; front ends drive it with [`Game::reveal`] and
//! [`Game::toggle_flag`] and redraw from [`Game::snapshot`].

pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod generator;
pub mod position;
pub mod reveal;
pub mod snapshot;

pub use board::{Board, Cell, CellStatus};
pub use config::GameConfig;
pub use error::{GameError, Result};
pub use game::{evaluate, Action, ActionOutcome, Game, GameStatus};
pub use position::Position;
pub use reveal::{FlagOutcome, RevealOutcome};
pub use snapshot::{BoardSnapshot, CellView, DisplayStatus};
