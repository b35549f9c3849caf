use crate::{Board, CellStatus, Position, Result};
use std::collections::VecDeque;
use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealOutcome {
    /// The target was not hidden, or the game is already over.
    NoChange,
    /// Safe cells were uncovered; `cells` counts the target plus any flood-filled cells.
    Revealed { cells: u32 },
    HitMine,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }

    pub const fn hit_mine(self) -> bool {
        matches!(self, Self::HitMine)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagOutcome {
    NoChange,
    Flagged,
    Unflagged,
}

impl FlagOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

impl Board {
    /// Uncovers the cell at `pos`.
    ///
    /// Only hidden cells react. A mine explodes; a safe cell is revealed, and if none of its
    /// neighbours is a mine every hidden neighbour is revealed in turn, transitively. Flagged
    /// cells are never uncovered by the cascade.
    pub fn reveal(&mut self, pos: Position) -> Result<RevealOutcome> {
        let cell = self.cell_mut(pos)?;
        if cell.status != CellStatus::Hidden {
            return Ok(RevealOutcome::NoChange);
        }
        if cell.is_mine() {
            cell.status = CellStatus::Exploded;
            return Ok(RevealOutcome::HitMine);
        }

        let mut to_reveal = VecDeque::from([pos]);
        let mut revealed = 0;

        while let Some(current) = to_reveal.pop_front() {
            let cell = self.cell_mut(current)?;
            if cell.status != CellStatus::Hidden || cell.is_mine() {
                continue;
            }

            cell.status = CellStatus::Revealed;
            revealed += 1;

            if cell.mine_neighbors() == 0 {
                let hidden = self.neighbors(current).filter(|&n| {
                    self.get_cell(n)
                        .is_ok_and(|c| c.status == CellStatus::Hidden)
                });
                to_reveal.extend(hidden);
            }
        }

        trace!(%pos, revealed, "revealed cells");
        Ok(RevealOutcome::Revealed { cells: revealed })
    }

    /// Toggles a flag on a hidden cell. Revealed and exploded cells are left alone.
    pub fn toggle_flag(&mut self, pos: Position) -> Result<FlagOutcome> {
        let cell = self.cell_mut(pos)?;
        Ok(match cell.status {
            CellStatus::Hidden => {
                cell.status = CellStatus::Flagged;
                FlagOutcome::Flagged
            }
            CellStatus::Flagged => {
                cell.status = CellStatus::Hidden;
                FlagOutcome::Unflagged
            }
            CellStatus::Revealed | CellStatus::Exploded => FlagOutcome::NoChange,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GameError;

    fn p(x: i32, y: i32) -> Position {
        Position::new(x, y)
    }

    fn status_at(board: &Board, x: i32, y: i32) -> CellStatus {
        board.get_cell(p(x, y)).unwrap().status()
    }

    #[test]
    fn test_reveal_numbered_cell_does_not_expand() {
        let mut board = Board::with_mines(4, &[p(0, 0), p(3, 3)]).unwrap();

        let outcome = board.reveal(p(2, 2)).unwrap();

        assert_eq!(outcome, RevealOutcome::Revealed { cells: 1 });
        assert_eq!(board.get_cell(p(2, 2)).unwrap().adjacent_mines(), Some(1));
        assert_eq!(board.revealed_count(), 1);
    }

    #[test]
    fn test_reveal_zero_floods_to_numbered_border() {
        let mut board = Board::with_mines(4, &[p(0, 0), p(3, 3)]).unwrap();

        let outcome = board.reveal(p(3, 0)).unwrap();

        // Both zero regions touch diagonally at (2, 1)/(1, 2), so every safe cell opens.
        assert_eq!(outcome, RevealOutcome::Revealed { cells: 14 });
        assert_eq!(board.get_cell(p(3, 0)).unwrap().adjacent_mines(), Some(0));
        assert_eq!(board.get_cell(p(2, 2)).unwrap().adjacent_mines(), Some(1));
        assert_eq!(board.get_cell(p(1, 1)).unwrap().adjacent_mines(), Some(1));
        assert_eq!(status_at(&board, 0, 0), CellStatus::Hidden);
        assert_eq!(status_at(&board, 3, 3), CellStatus::Hidden);
    }

    #[test]
    fn test_flood_stops_at_mine_wall() {
        let wall: Vec<Position> = (0..5).map(|y| p(2, y)).collect();
        let mut board = Board::with_mines(5, &wall).unwrap();

        let outcome = board.reveal(p(0, 0)).unwrap();

        assert_eq!(outcome, RevealOutcome::Revealed { cells: 10 });
        for y in 0..5 {
            assert_eq!(status_at(&board, 0, y), CellStatus::Revealed);
            assert_eq!(status_at(&board, 1, y), CellStatus::Revealed);
            assert_eq!(status_at(&board, 2, y), CellStatus::Hidden);
            assert_eq!(status_at(&board, 3, y), CellStatus::Hidden);
            assert_eq!(status_at(&board, 4, y), CellStatus::Hidden);
        }
        assert_eq!(board.get_cell(p(1, 2)).unwrap().adjacent_mines(), Some(3));
    }

    #[test]
    fn test_flood_skips_flagged_cells() {
        let mut board = Board::with_mines(3, &[]).unwrap();
        board.toggle_flag(p(2, 2)).unwrap();

        let outcome = board.reveal(p(0, 0)).unwrap();

        assert_eq!(outcome, RevealOutcome::Revealed { cells: 8 });
        assert_eq!(status_at(&board, 2, 2), CellStatus::Flagged);
    }

    #[test]
    fn test_reveal_mine_explodes() {
        let mut board = Board::with_mines(3, &[p(1, 1)]).unwrap();

        assert_eq!(board.reveal(p(1, 1)).unwrap(), RevealOutcome::HitMine);
        assert_eq!(status_at(&board, 1, 1), CellStatus::Exploded);
        assert_eq!(board.revealed_count(), 0);
    }

    #[test]
    fn test_reveal_is_idempotent() {
        let mut board = Board::with_mines(4, &[p(0, 0), p(3, 3)]).unwrap();
        board.reveal(p(2, 2)).unwrap();
        let before = board.clone();

        assert_eq!(board.reveal(p(2, 2)).unwrap(), RevealOutcome::NoChange);
        assert_eq!(board, before);
    }

    #[test]
    fn test_flag_then_reveal_is_noop() {
        let mut board = Board::with_mines(4, &[p(0, 0), p(3, 3)]).unwrap();

        assert_eq!(board.toggle_flag(p(0, 0)).unwrap(), FlagOutcome::Flagged);
        assert_eq!(board.reveal(p(0, 0)).unwrap(), RevealOutcome::NoChange);
        assert_eq!(status_at(&board, 0, 0), CellStatus::Flagged);
    }

    #[test]
    fn test_toggle_flag_round_trip_updates_counter() {
        let mut board = Board::with_mines(3, &[p(0, 0)]).unwrap();
        assert_eq!(board.mines_remaining(), 1);

        board.toggle_flag(p(1, 1)).unwrap();
        board.toggle_flag(p(2, 2)).unwrap();
        assert_eq!(board.mines_remaining(), -1);

        assert_eq!(board.toggle_flag(p(2, 2)).unwrap(), FlagOutcome::Unflagged);
        assert_eq!(status_at(&board, 2, 2), CellStatus::Hidden);
        assert_eq!(board.mines_remaining(), 0);
    }

    #[test]
    fn test_flag_on_revealed_cell_is_noop() {
        let mut board = Board::with_mines(3, &[p(0, 0)]).unwrap();
        board.reveal(p(1, 1)).unwrap();

        assert_eq!(board.toggle_flag(p(1, 1)).unwrap(), FlagOutcome::NoChange);
        assert_eq!(status_at(&board, 1, 1), CellStatus::Revealed);
    }

    #[test]
    fn test_out_of_bounds_is_an_error() {
        let mut board = Board::with_mines(3, &[p(0, 0)]).unwrap();
        let before = board.clone();

        assert_eq!(board.reveal(p(3, 1)), Err(GameError::OutOfBounds(p(3, 1))));
        assert_eq!(board.toggle_flag(p(0, -1)), Err(GameError::OutOfBounds(p(0, -1))));
        assert_eq!(board, before);
    }
}
