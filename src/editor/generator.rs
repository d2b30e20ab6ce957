// src/editor/generator.rs

use log::{debug, info, warn};
use rand::rngs::ThreadRng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;

use crate::editor::doors::place_doors;
use crate::editor::features::place_features;
use crate::editor::rng::RoomRng;
use crate::editor::template::RoomConfig;
use crate::error::{Result, RoomError};
use crate::map::feature::default_alphabet;
use crate::map::tile::Tile;
use crate::map::{DoorSite, FeatureSite, Grid};

/// Below this the ring and interior arithmetic has nothing to work with.
pub const MIN_GENERATABLE_SIZE: usize = 3;
/// Largest side the core will allocate a grid for.
pub const MAX_GENERATABLE_SIZE: usize = 1024;

/// A finished layout together with the sites that were placed on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedRoom {
    pub grid: Grid,
    pub doors: Vec<DoorSite>,
    pub features: Vec<FeatureSite>,
}

/// Runs the three placement phases over a fresh grid:
/// walls, then doors, then features.
pub struct RoomGenerator<R> {
    rng: R,
}

impl RoomGenerator<ThreadRng> {
    pub fn new() -> Self {
        Self::with_rng(rand::rng())
    }
}

impl Default for RoomGenerator<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl RoomGenerator<ChaCha8Rng> {
    /// A generator whose output is fully determined by `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(ChaCha8Rng::seed_from_u64(seed))
    }

    /// A ChaCha generator seeded from the thread RNG.
    pub fn from_entropy() -> Self {
        Self::with_rng(ChaCha8Rng::from_rng(&mut rand::rng()))
    }
}

impl<R: RoomRng> RoomGenerator<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Generates a room and returns only its grid.
    pub fn generate(&mut self, config: &RoomConfig) -> Result<Grid> {
        self.generate_room(config).map(|room| room.grid)
    }

    /// Generates a room, keeping the door and feature sites.
    ///
    /// Only a size outside `MIN_GENERATABLE_SIZE..=MAX_GENERATABLE_SIZE` is an
    /// error. Counts above the
    /// size's limits are clamped, and placement that runs out of attempts
    /// yields fewer sites than requested.
    pub fn generate_room(&mut self, config: &RoomConfig) -> Result<GeneratedRoom> {
        if !(MIN_GENERATABLE_SIZE..=MAX_GENERATABLE_SIZE).contains(&config.size) {
            return Err(RoomError::InvalidSize {
                size: config.size,
                min: MIN_GENERATABLE_SIZE,
                max: MAX_GENERATABLE_SIZE,
            });
        }
        let config = config.clamped();
        let alphabet = effective_alphabet(&config.feature_symbols);

        let mut grid = Grid::walled(config.size);
        debug!("Initialized {0}x{0} grid", config.size);

        let doors = place_doors(&mut grid, config.door_count, &mut self.rng);
        let features = place_features(
            &mut grid,
            config.feature_count,
            &doors,
            &alphabet,
            &mut self.rng,
        );

        info!(
            "Generated {0}x{0} room with {1}/{2} doors and {3}/{4} features",
            config.size,
            doors.len(),
            config.door_count,
            features.len(),
            config.feature_count
        );
        Ok(GeneratedRoom {
            grid,
            doors,
            features,
        })
    }
}

/// Drops structural symbols from a caller supplied alphabet; an alphabet
/// left empty falls back to the built-in features.
pub fn effective_alphabet(symbols: &[char]) -> Vec<char> {
    let mut alphabet = Vec::with_capacity(symbols.len());
    for &symbol in symbols {
        if Tile::is_reserved(symbol) {
            warn!("Ignoring reserved feature symbol '{}'", symbol);
        } else {
            alphabet.push(symbol);
        }
    }
    if alphabet.is_empty() {
        alphabet = default_alphabet();
    }
    alphabet
}

/// Generates `count` independent rooms in parallel. Room `i` uses its own
/// ChaCha stream seeded with `seed + i`, so the batch is reproducible no
/// matter how the work is scheduled.
pub fn generate_batch(config: &RoomConfig, count: usize, seed: u64) -> Result<Vec<GeneratedRoom>> {
    (0..count)
        .into_par_iter()
        .map(|i| RoomGenerator::seeded(seed.wrapping_add(i as u64)).generate_room(config))
        .collect()
}
