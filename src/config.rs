use crate::{GameError, Result};

pub const DEFAULT_SIZE: u32 = 6;
pub const DEFAULT_MINES: u32 = 4;

/// Largest accepted side length; keeps `size * size` comfortably inside `u32`.
pub const MAX_SIZE: u32 = 4096;

/// Parameters for a new game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub size: u32,
    pub mines: u32,
    /// Fixes the mine layout when set; otherwise the thread RNG is used.
    pub seed: Option<u64>,
}

impl GameConfig {
    pub const fn new(size: u32, mines: u32) -> Self {
        Self {
            size,
            mines,
            seed: None,
        }
    }

    pub const fn with_seed(self, seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..self
        }
    }

    pub const fn total_cells(&self) -> u64 {
        self.size as u64 * self.size as u64
    }

    pub fn validate(&self) -> Result<()> {
        if self.size == 0 || self.size > MAX_SIZE || u64::from(self.mines) >= self.total_cells() {
            return Err(GameError::InvalidConfiguration {
                size: self.size,
                mines: self.mines,
            });
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SIZE, DEFAULT_MINES)
    }
}
