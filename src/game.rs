use crate::{
    Board, BoardSnapshot, Cell, CellStatus, FlagOutcome, GameConfig, Position, Result,
    RevealOutcome,
};
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Reveal,
    Flag,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    Reveal(RevealOutcome),
    Flag(FlagOutcome),
}

impl ActionOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::Reveal(outcome) => outcome.has_update(),
            Self::Flag(outcome) => outcome.has_update(),
        }
    }
}

impl Board {
    /// Derives the game status from the cells alone.
    ///
    /// Any exploded cell means the game is lost, whatever else is on the board. Otherwise the
    /// game is won once every safe cell is revealed; mines may be flagged or simply left hidden.
    pub fn status(&self) -> GameStatus {
        if self.cells().any(|c| c.status() == CellStatus::Exploded) {
            return GameStatus::Lost;
        }

        let settled = |c: &Cell| match c.status() {
            CellStatus::Revealed => true,
            CellStatus::Hidden | CellStatus::Flagged => c.is_mine(),
            CellStatus::Exploded => false,
        };
        if self.cells().all(settled) {
            GameStatus::Won
        } else {
            GameStatus::InProgress
        }
    }

    /// Clears every flag and detonates every mine so the full layout is visible.
    pub fn expose_mines(&mut self) {
        for cell in self.cells.iter_mut() {
            if cell.status == CellStatus::Flagged {
                cell.status = CellStatus::Hidden;
            }
            if cell.is_mine() {
                cell.status = CellStatus::Exploded;
            }
        }
    }
}

/// Computes the status of `board`, exposing all mines if the game is lost.
pub fn evaluate(board: &mut Board) -> GameStatus {
    let status = board.status();
    if status == GameStatus::Lost {
        board.expose_mines();
    }
    status
}

/// One game session. Moves are ignored once the game is won or lost.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
}

impl Game {
    pub fn new(config: GameConfig) -> Result<Self> {
        Ok(Self::from_board(Board::from_config(&config)?))
    }

    pub fn from_board(mut board: Board) -> Self {
        evaluate(&mut board);
        Self { board }
    }

    pub fn reveal(&mut self, pos: Position) -> Result<RevealOutcome> {
        self.board.get_cell(pos)?;
        if self.is_finished() {
            return Ok(RevealOutcome::NoChange);
        }

        let outcome = self.board.reveal(pos)?;
        debug!(%pos, ?outcome, "reveal");
        if outcome.has_update() {
            self.settle();
        }
        Ok(outcome)
    }

    pub fn toggle_flag(&mut self, pos: Position) -> Result<FlagOutcome> {
        self.board.get_cell(pos)?;
        if self.is_finished() {
            return Ok(FlagOutcome::NoChange);
        }

        let outcome = self.board.toggle_flag(pos)?;
        debug!(%pos, ?outcome, mines_remaining = self.mines_remaining(), "flag");
        Ok(outcome)
    }

    pub fn perform_action(&mut self, pos: Position, action: Action) -> Result<ActionOutcome> {
        match action {
            Action::Reveal => self.reveal(pos).map(ActionOutcome::Reveal),
            Action::Flag => self.toggle_flag(pos).map(ActionOutcome::Flag),
        }
    }

    // Only called right after a move was accepted, so the game was still in progress before it.
    fn settle(&mut self) {
        match evaluate(&mut self.board) {
            GameStatus::Lost => info!(
                mines = self.board.mines_count(),
                revealed = self.board.revealed_count(),
                "game lost"
            ),
            GameStatus::Won => info!(
                mines = self.board.mines_count(),
                revealed = self.board.revealed_count(),
                "game won"
            ),
            GameStatus::InProgress => {}
        }
    }

    pub fn status(&self) -> GameStatus {
        self.board.status()
    }

    pub fn is_finished(&self) -> bool {
        self.status().is_finished()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn get_cell(&self, pos: Position) -> Result<&Cell> {
        self.board.get_cell(pos)
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        self.board.snapshot()
    }

    pub fn mines_remaining(&self) -> i64 {
        self.board.mines_remaining()
    }

    pub fn size(&self) -> u32 {
        self.board.size()
    }

    pub fn mines_count(&self) -> u32 {
        self.board.mines_count()
    }
}
