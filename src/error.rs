use crate::Position;
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid configuration: {mines} mines on a {size}x{size} board")]
    InvalidConfiguration { size: u32, mines: u32 },
    #[error("Position {0} is out of bounds")]
    OutOfBounds(Position),
}

pub type Result<T> = std::result::Result<T, GameError>;
