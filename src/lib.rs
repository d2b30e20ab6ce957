// src/lib.rs

pub mod config;
pub mod document;
pub mod editor;
pub mod error;
pub mod map;
#[cfg(feature = "gui")]
pub mod ui;
pub mod utils;

pub use error::{Result, RoomError};
