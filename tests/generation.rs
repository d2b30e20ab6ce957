use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use room_designer::editor::{limits, RoomConfig, RoomGenerator};
use room_designer::map::tile::{DOOR, FLOOR, WALL};
use room_designer::map::Grid;
use room_designer::utils::Position;
use room_designer::RoomError;

fn boundary_is_walls_and_doors(grid: &Grid) -> bool {
    grid.cells()
        .filter(|(pos, _)| grid.is_boundary(*pos))
        .all(|(_, symbol)| symbol == WALL || symbol == DOOR)
}

#[test]
fn limits_for_documented_sizes() {
    let l5 = limits(5);
    assert_eq!((l5.max_doors, l5.max_features), (4, 3));
    let l8 = limits(8);
    assert_eq!((l8.max_doors, l8.max_features), (4, 14));
    let l20 = limits(20);
    assert_eq!((l20.max_doors, l20.max_features), (4, 129));
}

#[test]
fn five_by_five_room_with_everything() {
    let config = RoomConfig::new(5, 4, 3, vec!['$', 'M', '*']);
    let mut generator = RoomGenerator::seeded(31337);

    for _ in 0..100 {
        let room = generator.generate_room(&config).unwrap();
        let grid = &room.grid;

        assert_eq!(grid.size(), 5);
        assert_eq!(grid.rows().count(), 5);
        assert!(boundary_is_walls_and_doors(grid));
        for corner in [(0, 0), (0, 4), (4, 0), (4, 4)] {
            assert_eq!(grid.get(Position::new(corner.0, corner.1)), Some(WALL));
        }

        assert!(room.doors.len() <= 4);
        assert!(room.features.len() <= 3);
        for feature in &room.features {
            assert_eq!(feature.symbol, ['$', 'M', '*'][feature.slot % 3]);
            for door in &room.doors {
                assert!(feature.position.manhattan_distance(&door.position) >= 2);
            }
        }
    }
}

#[test]
fn generate_returns_plain_grid() {
    let mut generator = RoomGenerator::seeded(8);
    let grid = generator.generate(&RoomConfig::default()).unwrap();
    assert_eq!(grid.size(), 8);
    let text = grid.to_string();
    assert_eq!(text.lines().count(), 8);
    assert!(text.lines().all(|line| line.chars().count() == 8));
}

#[test]
fn injected_rng_drives_generation() {
    let config = RoomConfig::new(9, 2, 6, vec!['&']);
    let a = RoomGenerator::with_rng(ChaCha8Rng::seed_from_u64(5)).generate(&config).unwrap();
    let b = RoomGenerator::with_rng(ChaCha8Rng::seed_from_u64(5)).generate(&config).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.count('&') + a.count(FLOOR) + a.count(WALL) + a.count(DOOR), 81);
}

#[test]
fn undersized_room_is_rejected() {
    let err = RoomGenerator::seeded(0)
        .generate(&RoomConfig::new(0, 0, 0, Vec::new()))
        .unwrap_err();
    assert!(matches!(err, RoomError::InvalidSize { size: 0, .. }));
    assert!(err.to_string().contains("outside the generatable range"));
}

#[test]
fn earlier_grids_are_untouched_by_later_calls() {
    let mut generator = RoomGenerator::seeded(12);
    let config = RoomConfig::new(10, 4, 16, vec!['$', 'M', '*']);
    let first = generator.generate(&config).unwrap();
    let snapshot = first.clone();
    for _ in 0..10 {
        generator.generate(&config).unwrap();
    }
    assert_eq!(first, snapshot);
}
