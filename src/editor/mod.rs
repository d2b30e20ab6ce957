// src/editor/mod.rs

pub mod core;
pub mod doors;
pub mod features;
pub mod generator;
pub mod limits;
pub mod rng;
pub mod template;

pub use self::core::Editor;
pub use doors::place_doors;
pub use features::place_features;
pub use generator::{generate_batch, GeneratedRoom, RoomGenerator};
pub use limits::{limits, Limits};
pub use rng::RoomRng;
pub use template::{RoomConfig, RoomTemplate};
