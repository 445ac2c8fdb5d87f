use serde::{Deserialize, Serialize};

/// A piece of evidence the Detective can find.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clue {
    /// Display name.
    pub name: String,
    /// What the Detective learns from it.
    pub description: String,
}

impl Clue {
    /// Create a clue.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// Stable identity of a Murderer tool.
///
/// Tools are listed in the order they were found, so a slot number on screen
/// says nothing about which tool it is. Dispatch always goes through the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolKind {
    /// The weapon, found in the couple's room.
    KitchenKnife,
    /// Lights the woods, found in the lodge.
    Flashlight,
    /// Spikes a drink, found in the woods.
    PoisonousBerry,
    /// Starts the getaway car, found at the party.
    CarKeys,
}

/// A Murderer tool and its discovery flag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tool {
    /// Which tool this is.
    pub kind: ToolKind,
    /// Display name.
    pub name: String,
    /// What the tool is good for.
    pub description: String,
    found: bool,
}

impl Tool {
    /// Create a tool that has not been found yet.
    pub fn new(kind: ToolKind, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            description: description.into(),
            found: false,
        }
    }

    /// Mark the tool as picked up.
    pub fn mark_found(&mut self) {
        self.found = true;
    }

    /// Whether the tool has been picked up this playthrough.
    pub fn is_found(&self) -> bool {
        self.found
    }

    /// Put the tool back for a new playthrough.
    pub fn reset(&mut self) {
        self.found = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tool_found_flag() {
        let mut tool = Tool::new(ToolKind::Flashlight, "Flashlight", "Can be used in dark places");
        assert!(!tool.is_found());
        tool.mark_found();
        tool.mark_found();
        assert!(tool.is_found());
        tool.reset();
        assert!(!tool.is_found());
    }

    #[test]
    fn tool_kind_serializes_snake_case() {
        let json = serde_json::to_string(&ToolKind::PoisonousBerry).unwrap();
        assert_eq!(json, "\"poisonous_berry\"");
    }
}
