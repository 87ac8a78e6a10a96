//! Teaching rooms.

use serde::{Deserialize, Serialize};

/// What a room is equipped for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomKind {
    /// Regular classroom.
    Theory,
    /// Laboratory with workstations.
    Lab,
}

/// A teaching room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// Display name, unique within a problem.
    pub name: String,
    /// Equipment class.
    pub kind: RoomKind,
}

impl Room {
    /// Regular classroom.
    pub fn theory(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: RoomKind::Theory,
        }
    }

    /// Laboratory.
    pub fn lab(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: RoomKind::Lab,
        }
    }

    /// Whether the room satisfies a lab requirement.
    pub fn is_lab(&self) -> bool {
        self.kind == RoomKind::Lab
    }
}
