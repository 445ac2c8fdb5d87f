//! Per-playthrough state.

use std::fmt;

use ll_core::{Clue, RoomId, ToolKind};
use serde::{Deserialize, Serialize};

use crate::command::parse_slot;
use crate::config::StoryConfig;

/// Which side of the story the player is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Collects clues and makes an arrest.
    Detective,
    /// Collects tools, kills, and escapes.
    Murderer,
}

impl Role {
    /// Parse the role menu: "1" is Detective, "2" is Murderer.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::Detective),
            "2" => Some(Self::Murderer),
            _ => None,
        }
    }

    /// Room the role's story opens in.
    pub fn start_room(self) -> RoomId {
        match self {
            Self::Detective => RoomId::SlipperySlope,
            Self::Murderer => RoomId::CouplesRoom,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Detective => write!(f, "Detective"),
            Self::Murderer => write!(f, "Murderer"),
        }
    }
}

/// What has happened to Valerie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Victim {
    /// Nothing yet.
    #[default]
    Alive,
    /// Stabbed in the porta-potty.
    Dead,
    /// Choking on a spiked drink.
    Choked,
}

impl Victim {
    /// Dead or choked. The Murderer must now escape.
    pub fn is_incapacitated(self) -> bool {
        !matches!(self, Self::Alive)
    }
}

/// State of one playthrough, rebuilt every time a new game starts.
#[derive(Debug, Clone)]
pub struct PlayState {
    /// The chosen role.
    pub role: Role,
    /// The player's character name.
    pub name: String,
    /// Where the player is.
    pub room: RoomId,
    /// Whether 's' has been pressed at the main menu.
    pub started: bool,
    /// Whether the couple's-room safe is open.
    pub safe_opened: bool,
    /// Back-moves left before the Murderer is caught.
    pub escape_attempts: u32,
    /// Valerie's condition.
    pub victim: Victim,
    /// Whether the flashlight has been switched on in the woods.
    pub flashlight_lit: bool,
    clues: Vec<Clue>,
    tools: Vec<ToolKind>,
}

impl PlayState {
    /// Fresh state for a role, standing in the role's start room.
    pub fn new(role: Role, name: impl Into<String>, config: &StoryConfig) -> Self {
        Self {
            role,
            name: name.into(),
            room: role.start_room(),
            started: false,
            safe_opened: false,
            escape_attempts: config.escape_attempts,
            victim: Victim::Alive,
            flashlight_lit: false,
            clues: Vec::new(),
            tools: Vec::new(),
        }
    }

    /// Clues found so far, in the order found.
    pub fn clues(&self) -> &[Clue] {
        &self.clues
    }

    /// Record a found clue.
    pub fn add_clue(&mut self, clue: Clue) {
        self.clues.push(clue);
    }

    /// Tools found so far, in the order found. This is the display order.
    pub fn tools(&self) -> &[ToolKind] {
        &self.tools
    }

    /// Record a found tool. A tool is never listed twice.
    pub fn add_tool(&mut self, tool: ToolKind) {
        if !self.tools.contains(&tool) {
            self.tools.push(tool);
        }
    }

    /// Whether a tool has been found.
    pub fn has_tool(&self, tool: ToolKind) -> bool {
        self.tools.contains(&tool)
    }

    /// Resolve a typed 1-based slot number to the tool shown there.
    pub fn tool_at_slot(&self, input: &str) -> Option<ToolKind> {
        parse_slot(input).and_then(|i| self.tools.get(i).copied())
    }

    /// The 1-based slot a tool is currently shown in.
    pub fn slot_of(&self, tool: ToolKind) -> Option<usize> {
        self.tools.iter().position(|&t| t == tool).map(|i| i + 1)
    }
}
