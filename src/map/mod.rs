// src/map/mod.rs
pub mod feature;
pub mod grid;
pub mod site;
pub mod tile;

pub use feature::{CustomFeature, FeatureCatalogue, FeatureColor};
pub use grid::Grid;
pub use site::{DoorSite, FeatureSite, WallSide};
pub use tile::Tile;
