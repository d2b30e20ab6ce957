// src/utils/geometry.rs
use serde::{Deserialize, Serialize};

/// A cell coordinate on the room grid. Rows and columns are 0-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// `|row1 - row2| + |col1 - col2|`
    pub fn manhattan_distance(&self, other: &Position) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// True when the position lies strictly inside a `size`x`size` boundary ring.
    pub fn is_interior(&self, size: usize) -> bool {
        size >= 3 && (1..size - 1).contains(&self.row) && (1..size - 1).contains(&self.col)
    }

    /// True when the position is one of the four corners of a `size`x`size` grid.
    pub fn is_corner(&self, size: usize) -> bool {
        let last = size.saturating_sub(1);
        (self.row == 0 || self.row == last) && (self.col == 0 || self.col == last)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manhattan_distance_is_symmetric() {
        let a = Position::new(1, 4);
        let b = Position::new(3, 1);
        assert_eq!(a.manhattan_distance(&b), 5);
        assert_eq!(b.manhattan_distance(&a), 5);
        assert_eq!(a.manhattan_distance(&a), 0);
    }

    #[test]
    fn test_interior_and_corners() {
        assert!(Position::new(1, 1).is_interior(5));
        assert!(Position::new(3, 3).is_interior(5));
        assert!(!Position::new(0, 2).is_interior(5));
        assert!(!Position::new(2, 4).is_interior(5));
        assert!(!Position::new(1, 1).is_interior(2));

        assert!(Position::new(0, 0).is_corner(5));
        assert!(Position::new(4, 0).is_corner(5));
        assert!(Position::new(4, 4).is_corner(5));
        assert!(!Position::new(0, 2).is_corner(5));
    }
}
