// src/document/library.rs

use chrono::{SecondsFormat, Utc};
use log::info;
use serde::{Deserialize, Serialize};

use crate::editor::template::RoomTemplate;
use crate::map::Grid;

/// A room kept in the in-memory library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedRoom {
    #[serde(flatten)]
    pub template: RoomTemplate,
    pub layout: Grid,
    /// Creation time in epoch milliseconds, bumped when needed to stay unique.
    pub id: u64,
    /// RFC 3339 / ISO-8601 creation timestamp.
    pub created: String,
}

/// The saved-room library. It lives only for the lifetime of the session.
#[derive(Debug, Default)]
pub struct Document {
    rooms: Vec<SavedRoom>,
    last_id: u64,
}

impl Document {
    /// Create a new empty Document.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rooms(&self) -> &[SavedRoom] {
        &self.rooms
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Stores a snapshot of `template` and `layout`, returning the new id.
    pub fn save_room(&mut self, template: &RoomTemplate, layout: &Grid) -> u64 {
        let now = Utc::now();
        let millis = u64::try_from(now.timestamp_millis()).unwrap_or(0);
        let id = millis.max(self.last_id + 1);
        self.last_id = id;

        self.rooms.push(SavedRoom {
            template: template.clone(),
            layout: layout.clone(),
            id,
            created: now.to_rfc3339_opts(SecondsFormat::Millis, true),
        });
        info!("Saved room '{}' as #{}", template.name, id);
        id
    }

    pub fn find(&self, id: u64) -> Option<&SavedRoom> {
        self.rooms.iter().find(|room| room.id == id)
    }

    pub fn remove_room(&mut self, id: u64) -> Option<SavedRoom> {
        let index = self.rooms.iter().position(|room| room.id == id)?;
        let removed = self.rooms.remove(index);
        info!("Deleted saved room '{}' (#{})", removed.template.name, id);
        Some(removed)
    }
}
