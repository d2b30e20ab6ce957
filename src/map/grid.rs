// src/map/grid.rs

use std::fmt;

use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

use crate::error::{Result, RoomError};
use crate::map::tile::{FLOOR, WALL};
use crate::utils::Position;

/// A square room layout, one symbol per cell, stored row-major.
///
/// Serializes as rows of single-character strings:
/// `[["#","#",...], ["#",".",...], ...]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<char>,
}

impl Grid {
    /// A `size`x`size` grid with every cell set to `symbol`.
    pub fn filled(size: usize, symbol: char) -> Self {
        Self {
            size,
            cells: vec![symbol; size * size],
        }
    }

    /// Floor everywhere, then walls stamped over the whole boundary ring.
    pub fn walled(size: usize) -> Self {
        let mut grid = Self::filled(size, FLOOR);
        let last = size.saturating_sub(1);
        for i in 0..size {
            grid.cells[i] = WALL; // top row
            grid.cells[last * size + i] = WALL; // bottom row
            grid.cells[i * size] = WALL; // left column
            grid.cells[i * size + last] = WALL; // right column
        }
        grid
    }

    /// Builds a grid from rows, as found in saved and exported layouts.
    pub fn from_layout(rows: Vec<Vec<char>>) -> Result<Self> {
        let size = rows.len();
        let mut cells = Vec::with_capacity(size * size);
        for (index, row) in rows.into_iter().enumerate() {
            if row.len() != size {
                return Err(RoomError::MalformedLayout {
                    reason: format!("row {} has {} cells, expected {}", index, row.len(), size),
                });
            }
            cells.extend(row);
        }
        Ok(Self { size, cells })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, position: Position) -> Option<char> {
        self.index(position).map(|i| self.cells[i])
    }

    /// Overwrites a cell. Out-of-range positions are ignored.
    pub(crate) fn set(&mut self, position: Position, symbol: char) {
        if let Some(i) = self.index(position) {
            self.cells[i] = symbol;
        }
    }

    pub fn is_boundary(&self, position: Position) -> bool {
        let last = self.size.saturating_sub(1);
        position.row == 0 || position.col == 0 || position.row == last || position.col == last
    }

    pub fn rows(&self) -> impl Iterator<Item = &[char]> + '_ {
        // chunks(0) panics, an empty grid simply has no rows
        self.cells.chunks(self.size.max(1))
    }

    /// Every cell with its coordinate, row-major.
    pub fn cells(&self) -> impl Iterator<Item = (Position, char)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &symbol)| (Position::new(i / size, i % size), symbol))
    }

    pub fn count(&self, symbol: char) -> usize {
        self.cells.iter().filter(|&&c| c == symbol).count()
    }

    pub fn to_layout(&self) -> Vec<Vec<char>> {
        self.rows().map(|row| row.to_vec()).collect()
    }

    fn index(&self, position: Position) -> Option<usize> {
        if position.row < self.size && position.col < self.size {
            Some(position.row * self.size + position.col)
        } else {
            None
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for symbol in row {
                write!(f, "{}", symbol)?;
            }
        }
        Ok(())
    }
}

impl Serialize for Grid {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.rows())
    }
}

impl<'de> Deserialize<'de> for Grid {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let rows = Vec::<Vec<char>>::deserialize(deserializer)?;
        Grid::from_layout(rows).map_err(de::Error::custom)
    }
}
