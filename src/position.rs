use std::fmt;

/// A cell coordinate. Signed so that off-board requests stay representable and can be
/// rejected with [`GameError::OutOfBounds`](crate::GameError::OutOfBounds).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The eight Moore-neighbourhood positions, not clipped to any board.
    pub fn neighbors(self) -> impl Iterator<Item = Position> {
        (-1..=1).flat_map(move |dy| {
            (-1..=1).filter_map(move |dx| {
                if dx == 0 && dy == 0 {
                    None
                } else {
                    Some(Position::new(self.x + dx, self.y + dy))
                }
            })
        })
    }

    pub fn is_adjacent_to(&self, other: Position) -> bool {
        *self != other && (self.x - other.x).abs() <= 1 && (self.y - other.y).abs() <= 1
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_creation() {
        let pos = Position::new(5, 10);
        assert_eq!(pos.x, 5);
        assert_eq!(pos.y, 10);
        assert_eq!(Position::from((5, 10)), pos);
    }

    #[test]
    fn test_neighbors() {
        let pos = Position::new(1, 1);
        let neighbors: Vec<Position> = pos.neighbors().collect();

        assert_eq!(neighbors.len(), 8);
        assert!(neighbors.contains(&Position::new(0, 0))); // Top-left
        assert!(neighbors.contains(&Position::new(1, 0))); // Top
        assert!(neighbors.contains(&Position::new(2, 0))); // Top-right
        assert!(neighbors.contains(&Position::new(0, 1))); // Left
        assert!(neighbors.contains(&Position::new(2, 1))); // Right
        assert!(neighbors.contains(&Position::new(0, 2))); // Bottom-left
        assert!(neighbors.contains(&Position::new(1, 2))); // Bottom
        assert!(neighbors.contains(&Position::new(2, 2))); // Bottom-right
        assert!(!neighbors.contains(&pos));
    }

    #[test]
    fn test_neighbors_are_unclipped() {
        let neighbors: Vec<Position> = Position::new(0, 0).neighbors().collect();
        assert_eq!(neighbors.len(), 8);
        assert!(neighbors.contains(&Position::new(-1, -1)));
    }

    #[test]
    fn test_adjacency() {
        let pos = Position::new(2, 2);
        assert!(pos.is_adjacent_to(Position::new(3, 3)));
        assert!(pos.is_adjacent_to(Position::new(2, 1)));
        assert!(!pos.is_adjacent_to(pos));
        assert!(!pos.is_adjacent_to(Position::new(4, 2)));
    }

    #[test]
    fn test_display() {
        assert_eq!(Position::new(3, -1).to_string(), "(3, -1)");
    }
}
