// src/utils/mod.rs
pub mod geometry;
pub mod util;

pub use geometry::Position;
pub use util::{clamp, slugify};
