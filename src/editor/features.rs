// src/editor/features.rs

use log::{debug, warn};

use crate::editor::limits::limits;
use crate::editor::rng::RoomRng;
use crate::map::tile::FLOOR;
use crate::map::{DoorSite, FeatureSite, Grid};
use crate::utils::Position;

/// Draws allowed per feature slot before the slot is skipped.
pub const FEATURE_ATTEMPTS: usize = 50;

/// Minimum Manhattan distance between any feature and any door.
pub const MIN_DOOR_DISTANCE: usize = 2;

/// Scatters up to `feature_count` features over the interior floor.
///
/// Slot `i` uses `alphabet[i % alphabet.len()]`. Each slot gets
/// `FEATURE_ATTEMPTS` interior draws; a draw is accepted when the cell is
/// still floor and at least `MIN_DOOR_DISTANCE` away from every door. A slot
/// that exhausts its draws is skipped.
pub fn place_features<R: RoomRng + ?Sized>(
    grid: &mut Grid,
    feature_count: usize,
    doors: &[DoorSite],
    alphabet: &[char],
    rng: &mut R,
) -> Vec<FeatureSite> {
    let size = grid.size();
    let wanted = limits(size).clamp_features(feature_count);
    if wanted < feature_count {
        debug!("Clamped feature count {} to {} for size {}", feature_count, wanted, size);
    }
    if wanted == 0 || alphabet.is_empty() {
        return Vec::new();
    }

    let mut features = Vec::with_capacity(wanted);
    for slot in 0..wanted {
        let symbol = alphabet[slot % alphabet.len()];
        match find_site(grid, doors, rng) {
            Some(position) => {
                grid.set(position, symbol);
                features.push(FeatureSite {
                    position,
                    symbol,
                    slot,
                });
            }
            None => debug!("Skipped feature slot {} ('{}')", slot, symbol),
        }
    }

    if features.len() < wanted {
        warn!("Placed only {} of {} features", features.len(), wanted);
    }
    debug!("Placed {} features", features.len());
    features
}

fn find_site<R: RoomRng + ?Sized>(grid: &Grid, doors: &[DoorSite], rng: &mut R) -> Option<Position> {
    let size = grid.size();
    (0..FEATURE_ATTEMPTS).find_map(|_| {
        let position = Position::new(rng.roll(1, size - 2), rng.roll(1, size - 2));
        let open = grid.get(position) == Some(FLOOR);
        let clear_of_doors = doors
            .iter()
            .all(|door| door.position.manhattan_distance(&position) >= MIN_DOOR_DISTANCE);
        (open && clear_of_doors).then_some(position)
    })
}
