//! Read-only projection of a board for front ends.

use crate::{Board, Cell, CellStatus, GameStatus, Position};
use std::fmt;

/// What a player is allowed to see of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayStatus {
    Hidden,
    Flagged,
    Revealed(u8),
    Exploded,
}

impl DisplayStatus {
    pub const fn symbol(self) -> char {
        match self {
            Self::Hidden => '#',
            Self::Flagged => 'F',
            Self::Exploded => '*',
            Self::Revealed(0) => '.',
            // Adjacency counts never exceed 8.
            Self::Revealed(n) => (b'0' + n) as char,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellView {
    pub position: Position,
    pub display: DisplayStatus,
    pub adjacent_mines: Option<u8>,
}

impl From<&Cell> for CellView {
    fn from(cell: &Cell) -> Self {
        let display = match (cell.status(), cell.adjacent_mines()) {
            (CellStatus::Revealed, Some(n)) => DisplayStatus::Revealed(n),
            (CellStatus::Revealed, None) | (CellStatus::Hidden, _) => DisplayStatus::Hidden,
            (CellStatus::Flagged, _) => DisplayStatus::Flagged,
            (CellStatus::Exploded, _) => DisplayStatus::Exploded,
        };
        Self {
            position: cell.position(),
            display,
            adjacent_mines: cell.adjacent_mines(),
        }
    }
}

/// Copy of the visible board state, cells in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardSnapshot {
    size: u32,
    status: GameStatus,
    mines_remaining: i64,
    cells: Vec<CellView>,
}

impl BoardSnapshot {
    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn mines_remaining(&self) -> i64 {
        self.mines_remaining
    }

    pub fn cells(&self) -> &[CellView] {
        &self.cells
    }

    pub fn get(&self, pos: Position) -> Option<&CellView> {
        let size = self.size as i32;
        if pos.x < 0 || pos.y < 0 || pos.x >= size || pos.y >= size {
            return None;
        }
        self.cells.get((pos.y * size + pos.x) as usize)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[CellView]> {
        self.cells.chunks(self.size as usize)
    }
}

impl fmt::Display for BoardSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            let line: Vec<String> = row.iter().map(|c| c.display.symbol().to_string()).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

impl Board {
    pub fn snapshot(&self) -> BoardSnapshot {
        let cells = self
            .iter_positions()
            .filter_map(|pos| self.get_cell(pos).ok())
            .map(CellView::from)
            .collect();

        BoardSnapshot {
            size: self.size(),
            status: self.status(),
            mines_remaining: self.mines_remaining(),
            cells,
        }
    }
}
