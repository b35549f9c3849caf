//! Random mine placement.

use crate::{GameConfig, Position, Result};
use rand::Rng;
use std::collections::HashSet;
use tracing::trace;

/// Picks `mines` distinct positions on a `size`x`size` grid.
///
/// Draws are uniform over the whole grid; a draw that lands on an already chosen position is
/// discarded and retried, so the result always holds exactly `mines` positions.
pub fn place_mines<R: Rng + ?Sized>(
    size: u32,
    mines: u32,
    rng: &mut R,
) -> Result<HashSet<Position>> {
    GameConfig::new(size, mines).validate()?;

    let target = mines as usize;
    let mut positions = HashSet::with_capacity(target);
    let mut draws: u64 = 0;

    while positions.len() < target {
        let x = rng.gen_range(0..size) as i32;
        let y = rng.gen_range(0..size) as i32;
        positions.insert(Position::new(x, y));
        draws += 1;
    }

    trace!(size, mines, draws, ?positions, "placed mines");
    Ok(positions)
}
