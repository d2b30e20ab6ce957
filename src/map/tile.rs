// src/map/tile.rs

/// Boundary ring symbol.
pub const WALL: char = '#';
/// Open interior symbol.
pub const FLOOR: char = '.';
/// Opening in the boundary ring.
pub const DOOR: char = '+';

/// Symbols a feature may never use, since they already mean something.
pub const RESERVED_SYMBOLS: [char; 3] = [WALL, FLOOR, DOOR];

/// A cell symbol classified by role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tile {
    Wall,
    Floor,
    Door,
    Feature(char),
}

impl Tile {
    pub fn classify(symbol: char) -> Self {
        match symbol {
            WALL => Tile::Wall,
            FLOOR => Tile::Floor,
            DOOR => Tile::Door,
            other => Tile::Feature(other),
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Tile::Wall => WALL,
            Tile::Floor => FLOOR,
            Tile::Door => DOOR,
            Tile::Feature(symbol) => *symbol,
        }
    }

    /// Returns a user-friendly name for the structural tiles.
    /// Features are described by the catalogue that owns them.
    pub fn name(&self) -> Option<&'static str> {
        match self {
            Tile::Wall => Some("Wall"),
            Tile::Floor => Some("Empty Floor"),
            Tile::Door => Some("Door"),
            Tile::Feature(_) => None,
        }
    }

    pub fn is_reserved(symbol: char) -> bool {
        RESERVED_SYMBOLS.contains(&symbol)
    }
}
