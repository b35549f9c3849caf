use crate::{generator, GameConfig, GameError, Position, Result};
use itertools::iproduct;
use ndarray::Array2;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::collections::HashSet;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellStatus {
    #[default]
    Hidden,
    Flagged,
    Revealed,
    Exploded,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    position: Position,
    is_mine: bool,
    pub(crate) status: CellStatus,
    adjacent_mines: u8,
}

impl Cell {
    pub fn position(&self) -> Position {
        self.position
    }

    pub fn is_mine(&self) -> bool {
        self.is_mine
    }

    pub fn status(&self) -> CellStatus {
        self.status
    }

    /// Mines around this cell, only known once the cell has been revealed.
    pub fn adjacent_mines(&self) -> Option<u8> {
        (self.status == CellStatus::Revealed).then_some(self.adjacent_mines)
    }

    pub(crate) fn mine_neighbors(&self) -> u8 {
        self.adjacent_mines
    }
}

/// Square grid owning every cell of one game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    pub(crate) cells: Array2<Cell>,
    size: u32,
    mines_count: u32,
}

impl Board {
    /// Generates a board with `mines` randomly placed mines.
    pub fn generate(size: u32, mines: u32) -> Result<Self> {
        Self::generate_with_rng(size, mines, &mut rand::thread_rng())
    }

    pub fn generate_seeded(size: u32, mines: u32, seed: u64) -> Result<Self> {
        Self::generate_with_rng(size, mines, &mut StdRng::seed_from_u64(seed))
    }

    pub fn generate_with_rng<R: Rng + ?Sized>(size: u32, mines: u32, rng: &mut R) -> Result<Self> {
        let layout = generator::place_mines(size, mines, rng)?;
        debug!(size, mines, "generated board");
        Ok(Self::build(size, &layout))
    }

    pub fn from_config(config: &GameConfig) -> Result<Self> {
        match config.seed {
            Some(seed) => Self::generate_seeded(config.size, config.mines, seed),
            None => Self::generate(config.size, config.mines),
        }
    }

    /// Builds a board with mines exactly at `mines`. Duplicate positions count once.
    pub fn with_mines(size: u32, mines: &[Position]) -> Result<Self> {
        GameConfig::new(size, 0).validate()?;

        let mut layout = HashSet::with_capacity(mines.len());
        for &pos in mines {
            if !in_bounds(size, pos) {
                return Err(GameError::OutOfBounds(pos));
            }
            layout.insert(pos);
        }

        let count = u32::try_from(layout.len()).unwrap_or(u32::MAX);
        GameConfig::new(size, count).validate()?;
        Ok(Self::build(size, &layout))
    }

    fn build(size: u32, mines: &HashSet<Position>) -> Self {
        let side = size as usize;
        let cells = Array2::from_shape_fn((side, side), |(x, y)| {
            let position = Position::new(x as i32, y as i32);
            Cell {
                position,
                is_mine: mines.contains(&position),
                status: CellStatus::Hidden,
                adjacent_mines: position.neighbors().filter(|p| mines.contains(p)).count() as u8,
            }
        });

        Self {
            cells,
            size,
            mines_count: mines.len() as u32,
        }
    }

    pub fn is_within_bounds(&self, pos: Position) -> bool {
        in_bounds(self.size, pos)
    }

    fn index(&self, pos: Position) -> Option<[usize; 2]> {
        self.is_within_bounds(pos).then_some([pos.x as usize, pos.y as usize])
    }

    pub fn get_cell(&self, pos: Position) -> Result<&Cell> {
        self.index(pos)
            .map(|index| &self.cells[index])
            .ok_or(GameError::OutOfBounds(pos))
    }

    pub(crate) fn cell_mut(&mut self, pos: Position) -> Result<&mut Cell> {
        let index = self.index(pos).ok_or(GameError::OutOfBounds(pos))?;
        Ok(&mut self.cells[index])
    }

    /// Neighbours of `pos` that lie on the board.
    pub fn neighbors(&self, pos: Position) -> impl Iterator<Item = Position> {
        let size = self.size;
        pos.neighbors().filter(move |p| in_bounds(size, *p))
    }

    pub fn count_adjacent_mines(&self, pos: Position) -> Result<u8> {
        self.get_cell(pos).map(Cell::mine_neighbors)
    }

    /// All positions in row-major order.
    pub fn iter_positions(&self) -> impl Iterator<Item = Position> {
        let size = self.size as i32;
        iproduct!(0..size, 0..size).map(|(y, x)| Position::new(x, y))
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.size, self.size)
    }

    pub fn mines_count(&self) -> u32 {
        self.mines_count
    }

    pub fn mine_positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.cells().filter(|c| c.is_mine).map(|c| c.position)
    }

    fn count_status(&self, status: CellStatus) -> u32 {
        self.cells().filter(|c| c.status == status).count() as u32
    }

    pub fn flagged_count(&self) -> u32 {
        self.count_status(CellStatus::Flagged)
    }

    pub fn revealed_count(&self) -> u32 {
        self.count_status(CellStatus::Revealed)
    }

    /// Mines minus flags. Negative when the player has placed more flags than there are mines.
    pub fn mines_remaining(&self) -> i64 {
        i64::from(self.mines_count) - i64::from(self.flagged_count())
    }
}

fn in_bounds(size: u32, pos: Position) -> bool {
    let size = i64::from(size);
    (0..size).contains(&i64::from(pos.x)) && (0..size).contains(&i64::from(pos.y))
}
