// src/editor/doors.rs

use log::{debug, warn};

use crate::editor::limits::limits;
use crate::editor::rng::RoomRng;
use crate::map::tile::DOOR;
use crate::map::{DoorSite, Grid, WallSide};

/// Door sampling gives up after `size * DOOR_ATTEMPT_FACTOR` draws.
pub const DOOR_ATTEMPT_FACTOR: usize = 50;

/// Opens up to `door_count` distinct doors on the boundary ring of `grid`.
///
/// Each draw picks a side uniformly, then an offset in `1..=size-2` along it,
/// so corners are never chosen. A draw that hits an already accepted door is
/// rejected. The count is clamped to the size's door limit and the attempt
/// budget is finite; if it runs out the room simply gets fewer doors.
pub fn place_doors<R: RoomRng + ?Sized>(
    grid: &mut Grid,
    door_count: usize,
    rng: &mut R,
) -> Vec<DoorSite> {
    let size = grid.size();
    let wanted = limits(size).clamp_doors(door_count);
    if wanted < door_count {
        debug!("Clamped door count {} to {} for size {}", door_count, wanted, size);
    }
    if wanted == 0 {
        return Vec::new();
    }

    let budget = size * DOOR_ATTEMPT_FACTOR;
    let mut doors: Vec<DoorSite> = Vec::with_capacity(wanted);
    let mut attempts = 0;

    while doors.len() < wanted && attempts < budget {
        attempts += 1;
        let side = WallSide::ALL[rng.roll(0, WallSide::ALL.len() - 1)];
        let offset = rng.roll(1, size - 2);
        let position = side.position(size, offset);

        if doors.iter().any(|door| door.position == position) {
            continue;
        }
        grid.set(position, DOOR);
        doors.push(DoorSite { position, side });
    }

    if doors.len() < wanted {
        warn!(
            "Placed only {} of {} doors after {} attempts",
            doors.len(),
            wanted,
            attempts
        );
    }
    debug!("Placed {} doors in {} attempts", doors.len(), attempts);
    doors
}
