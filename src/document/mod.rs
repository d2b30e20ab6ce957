// src/document/mod.rs
mod export;
mod library;

pub use self::export::ExportRecord;
pub use self::library::{Document, SavedRoom};
