// src/error.rs

use std::io;

use thiserror::Error;

/// Errors surfaced by the room designer.
///
/// Generation itself only fails on a room size outside the generatable range; over-limit counts
/// are clamped and exhausted placement budgets just yield fewer sites.
#[derive(Error, Debug)]
pub enum RoomError {
    #[error("room size {size} is outside the generatable range {min}..={max}")]
    InvalidSize { size: usize, min: usize, max: usize },

    #[error("symbol '{symbol}' is reserved for walls, floors and doors")]
    ReservedSymbol { symbol: char },

    #[error("symbol '{symbol}' is already used by another feature")]
    DuplicateSymbol { symbol: char },

    #[error("feature name must not be empty")]
    EmptyFeatureName,

    #[error("no room has been generated yet")]
    NoRoom,

    #[error("malformed layout: {reason}")]
    MalformedLayout { reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RoomError>;
