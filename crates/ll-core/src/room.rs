use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the six rooms of the lodge.
///
/// Rooms form a line: the party area at index 0 and the couple's room at
/// index 5. The Detective may jump to any room; the Murderer walks the line
/// from the couple's room toward the party and back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomId {
    /// The party area, index 0.
    SlipperySlope,
    /// The restroom, index 1.
    PortaPotty,
    /// The bar, index 2.
    Bar,
    /// The woods, index 3.
    Woods,
    /// The lodge entrance, index 4.
    Lodge,
    /// The couple's room, index 5.
    CouplesRoom,
}

impl RoomId {
    /// Every room in index order.
    pub const ALL: [RoomId; 6] = [
        Self::SlipperySlope,
        Self::PortaPotty,
        Self::Bar,
        Self::Woods,
        Self::Lodge,
        Self::CouplesRoom,
    ];

    /// Zero-based index of the room.
    pub fn index(self) -> usize {
        match self {
            Self::SlipperySlope => 0,
            Self::PortaPotty => 1,
            Self::Bar => 2,
            Self::Woods => 3,
            Self::Lodge => 4,
            Self::CouplesRoom => 5,
        }
    }

    /// Look up a room by zero-based index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Parse a 1-based room number as typed at the room menu.
    pub fn from_choice(input: &str) -> Option<Self> {
        let number: usize = input.trim().parse().ok()?;
        number.checked_sub(1).and_then(Self::from_index)
    }

    /// The neighbouring room on the party side, if any.
    pub fn toward_exit(self) -> Option<Self> {
        self.index().checked_sub(1).and_then(Self::from_index)
    }

    /// The neighbouring room on the couple's-room side, if any.
    pub fn toward_home(self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "room {}", self.index())
    }
}

/// A room record with its one-time examination flag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    /// Which room this is.
    pub id: RoomId,
    /// Display name.
    pub name: String,
    /// Short description shown on entry.
    pub description: String,
    examined: bool,
}

impl Room {
    /// Create an unexamined room.
    pub fn new(id: RoomId, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            examined: false,
        }
    }

    /// Mark the room as examined.
    pub fn examine(&mut self) {
        self.examined = true;
    }

    /// Whether the room has already yielded its find.
    pub fn is_examined(&self) -> bool {
        self.examined
    }

    /// Clear the examined flag for a new playthrough.
    pub fn reset(&mut self) {
        self.examined = false;
    }
}
