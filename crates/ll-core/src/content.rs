use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{LodgeError, LodgeResult};
use crate::item::{Clue, Tool, ToolKind};
use crate::room::{Room, RoomId};

/// The one location the story takes place in.
pub const LOCATION_NAME: &str = "Lonely Lodge";

/// Fixed content of the lodge: its rooms and what can be found in them.
///
/// Built once per process. A new playthrough calls [`LodgeContent::reset`]
/// rather than rebuilding the tables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LodgeContent {
    rooms: Vec<Room>,
    clues: BTreeMap<RoomId, Clue>,
    safe_clue: Clue,
    tools: BTreeMap<RoomId, Tool>,
}

impl LodgeContent {
    /// Build the lodge.
    pub fn new() -> Self {
        let rooms = vec![
            Room::new(
                RoomId::SlipperySlope,
                "Slippery Slope",
                "The party takes place here.",
            ),
            Room::new(RoomId::PortaPotty, "Porta-Potty", "A Tightly confined cubicle."),
            Room::new(RoomId::Bar, "Bar", "An old fashioned Bar."),
            Room::new(RoomId::Woods, "Woods", "Dark and mysterious."),
            Room::new(RoomId::Lodge, "Lonely Lodge", "A cosy and warm welcoming lodge."),
            Room::new(
                RoomId::CouplesRoom,
                "The Couple's Room",
                "A nice spacious room.",
            ),
        ];

        let clues = BTreeMap::from([
            (
                RoomId::PortaPotty,
                Clue::new(
                    "Dead body of Valerie(Girlfriend)",
                    "Found in the Porta Potty with visible stab wounds.",
                ),
            ),
            (
                RoomId::Bar,
                Clue::new(
                    "Bracelet",
                    "Found on the Bar floor with a 4 digit number with 1 number illegible 22*4. \
                     Maybe John(Boyfriend) could know about it?",
                ),
            ),
            (
                RoomId::Woods,
                Clue::new(
                    "Number of Footprints",
                    "Found in the woods leading back to the lodge.",
                ),
            ),
            (
                RoomId::CouplesRoom,
                Clue::new(
                    "Safe",
                    "Found in the Couple's Room, examine the room again to enter 4 digit code.",
                ),
            ),
        ]);

        let safe_clue = Clue::new("Bloody Knife", "Found in the couple's room inside a safe.");

        let tools = BTreeMap::from([
            (
                RoomId::CouplesRoom,
                Tool::new(
                    ToolKind::KitchenKnife,
                    "Kitchen knife",
                    "A perfect weapon for murdering",
                ),
            ),
            (
                RoomId::Lodge,
                Tool::new(ToolKind::Flashlight, "Flashlight", "Can be used in dark places"),
            ),
            (
                RoomId::Woods,
                Tool::new(
                    ToolKind::PoisonousBerry,
                    "Poisonous berry",
                    "Can be used to spike drinks",
                ),
            ),
            (
                RoomId::SlipperySlope,
                Tool::new(ToolKind::CarKeys, "Car keys", "Keys to a strangers car"),
            ),
        ]);

        Self {
            rooms,
            clues,
            safe_clue,
            tools,
        }
    }

    /// All rooms in index order.
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Get a room.
    pub fn room(&self, id: RoomId) -> &Room {
        &self.rooms[id.index()]
    }

    /// Get a mutable room.
    pub fn room_mut(&mut self, id: RoomId) -> &mut Room {
        &mut self.rooms[id.index()]
    }

    /// Get a room by raw index.
    pub fn room_at(&self, index: usize) -> LodgeResult<&Room> {
        RoomId::from_index(index)
            .map(|id| self.room(id))
            .ok_or(LodgeError::RoomOutOfRange(index))
    }

    /// The clue hidden in a room, if the room has one.
    pub fn clue_in(&self, id: RoomId) -> Option<&Clue> {
        self.clues.get(&id)
    }

    /// The clue locked in the couple's-room safe.
    pub fn safe_clue(&self) -> &Clue {
        &self.safe_clue
    }

    /// The tool lying in a room, if the room has one.
    pub fn tool_in(&self, id: RoomId) -> Option<&Tool> {
        self.tools.get(&id)
    }

    /// Mutable access to the tool lying in a room.
    pub fn tool_in_mut(&mut self, id: RoomId) -> Option<&mut Tool> {
        self.tools.get_mut(&id)
    }

    /// Find a tool by kind.
    pub fn tool(&self, kind: ToolKind) -> LodgeResult<&Tool> {
        self.tools
            .values()
            .find(|t| t.kind == kind)
            .ok_or(LodgeError::ToolMissing(kind))
    }

    /// Numbered room menu, 1-based.
    pub fn room_listing(&self) -> Vec<String> {
        self.rooms
            .iter()
            .enumerate()
            .map(|(i, room)| format!("{}. {}", i + 1, room.name))
            .collect()
    }

    /// Clear every examined and found flag.
    pub fn reset(&mut self) {
        for room in &mut self.rooms {
            room.reset();
        }
        for tool in self.tools.values_mut() {
            tool.reset();
        }
    }
}

impl Default for LodgeContent {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn six_rooms_in_index_order() {
        let lodge = LodgeContent::new();
        assert_eq!(lodge.rooms().len(), 6);
        for (i, room) in lodge.rooms().iter().enumerate() {
            assert_eq!(room.id.index(), i);
        }
        assert_eq!(lodge.room(RoomId::Lodge).name, LOCATION_NAME);
    }

    #[test]
    fn room_at_rejects_out_of_range() {
        let lodge = LodgeContent::new();
        assert_eq!(lodge.room_at(2).unwrap().name, "Bar");
        assert!(matches!(
            lodge.room_at(6),
            Err(LodgeError::RoomOutOfRange(6))
        ));
    }

    #[test]
    fn missing_entries_are_not_errors() {
        let lodge = LodgeContent::new();
        assert!(lodge.clue_in(RoomId::SlipperySlope).is_none());
        assert!(lodge.clue_in(RoomId::Lodge).is_none());
        assert!(lodge.tool_in(RoomId::PortaPotty).is_none());
        assert!(lodge.tool_in(RoomId::Bar).is_none());
    }

    #[test]
    fn clue_and_tool_tables() {
        let lodge = LodgeContent::new();
        assert_eq!(lodge.clue_in(RoomId::Bar).unwrap().name, "Bracelet");
        assert!(lodge.clue_in(RoomId::Bar).unwrap().description.contains("22*4"));
        assert_eq!(lodge.safe_clue().name, "Bloody Knife");
        assert_eq!(
            lodge.tool_in(RoomId::CouplesRoom).unwrap().kind,
            ToolKind::KitchenKnife
        );
        assert_eq!(
            lodge.tool(ToolKind::CarKeys).unwrap().name,
            "Car keys"
        );
    }

    #[test]
    fn reset_clears_flags_only() {
        let mut lodge = LodgeContent::new();
        lodge.room_mut(RoomId::Woods).examine();
        lodge.tool_in_mut(RoomId::Woods).unwrap().mark_found();

        lodge.reset();

        assert!(!lodge.room(RoomId::Woods).is_examined());
        assert!(!lodge.tool(ToolKind::PoisonousBerry).unwrap().is_found());
        assert_eq!(lodge.clue_in(RoomId::Woods).unwrap().name, "Number of Footprints");
    }

    #[test]
    fn room_listing_menu() {
        let lodge = LodgeContent::new();
        insta::assert_snapshot!(lodge.room_listing().join("\n"), @r"
        1. Slippery Slope
        2. Porta-Potty
        3. Bar
        4. Woods
        5. Lonely Lodge
        6. The Couple's Room
        ");
    }
}
