// src/map/site.rs
use serde::{Deserialize, Serialize};

use crate::utils::Position;

/// One of the four sides of the boundary ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WallSide {
    North,
    East,
    South,
    West,
}

impl WallSide {
    /// Every side, in the order door sampling indexes them.
    pub const ALL: [WallSide; 4] = [
        WallSide::North,
        WallSide::East,
        WallSide::South,
        WallSide::West,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            WallSide::North => "North",
            WallSide::East => "East",
            WallSide::South => "South",
            WallSide::West => "West",
        }
    }

    /// Maps an offset along this side onto the boundary ring of a
    /// `size`x`size` grid. Offsets in `1..=size-2` never land on a corner.
    pub fn position(&self, size: usize, offset: usize) -> Position {
        let last = size - 1;
        match self {
            WallSide::North => Position::new(0, offset),
            WallSide::East => Position::new(offset, last),
            WallSide::South => Position::new(last, offset),
            WallSide::West => Position::new(offset, 0),
        }
    }

    /// The side a non-corner boundary cell belongs to.
    pub fn of(position: Position, size: usize) -> Option<WallSide> {
        if size < 3 || position.is_corner(size) {
            return None;
        }
        let last = size - 1;
        match (position.row, position.col) {
            (0, _) => Some(WallSide::North),
            (row, _) if row == last => Some(WallSide::South),
            (_, 0) => Some(WallSide::West),
            (_, col) if col == last => Some(WallSide::East),
            _ => None,
        }
    }
}

/// An accepted door opening on the boundary ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DoorSite {
    pub position: Position,
    pub side: WallSide,
}

/// A claimed interior cell. `slot` is the feature slot that claimed it,
/// which also picks the symbol from the alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FeatureSite {
    pub position: Position,
    pub symbol: char,
    pub slot: usize,
}
