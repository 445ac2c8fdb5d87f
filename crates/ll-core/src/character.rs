use serde::{Deserialize, Serialize};

use crate::room::RoomId;

/// The four kinds of non-player character at the lodge.
///
/// Kinds differ only in their text and where they stand, so the behaviour
/// lives on [`Character`] and the per-kind strings live here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CharacterKind {
    /// Ned, serving at the bar.
    BarMan,
    /// John, the victim's boyfriend.
    Boyfriend,
    /// Samantha, the victim's ex best friend.
    ExBestFriend,
    /// Linda, at the lodge entrance.
    Receptionist,
}

impl CharacterKind {
    /// Arrest menu order. The first entry is the culprit.
    pub const SUSPECTS: [CharacterKind; 4] = [
        Self::Boyfriend,
        Self::ExBestFriend,
        Self::BarMan,
        Self::Receptionist,
    ];

    /// Where this character spends the evening.
    pub fn home(self) -> RoomId {
        match self {
            Self::BarMan => RoomId::Bar,
            Self::Boyfriend | Self::ExBestFriend => RoomId::SlipperySlope,
            Self::Receptionist => RoomId::Lodge,
        }
    }

    fn action_line(self, name: &str) -> String {
        match self {
            Self::BarMan => format!("Bar Man {name} is busy serving drinks."),
            Self::Boyfriend => format!("{name} is anxiously waiting for updates on the situation."),
            Self::ExBestFriend => {
                format!("{name} is trying to recall the last time they saw the victim.")
            }
            Self::Receptionist => {
                format!("Hotel Receptionist {name} is busy handling guests at the lodge entrance.")
            }
        }
    }
}

/// A character with a single line of dialogue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Character {
    /// Which character this is.
    pub kind: CharacterKind,
    /// Display name.
    pub name: String,
    dialogue: String,
    interacted: bool,
}

impl Character {
    /// Create a character who has not been spoken to.
    pub fn new(kind: CharacterKind, name: impl Into<String>, dialogue: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            dialogue: dialogue.into(),
            interacted: false,
        }
    }

    /// Talk to the character.
    ///
    /// The first call reveals the dialogue line; every later call gets a
    /// refusal until [`Character::forget`] is called.
    pub fn interact(&mut self) -> String {
        if self.interacted {
            format!("{} is no longer interested in talking.", self.name)
        } else {
            self.interacted = true;
            format!("{}: {}", self.name, self.dialogue)
        }
    }

    /// Flavor line describing what the character is doing. No state change.
    pub fn perform_action(&self) -> String {
        self.kind.action_line(&self.name)
    }

    /// Let the character talk again.
    pub fn forget(&mut self) {
        self.interacted = false;
    }

    /// Replace the dialogue line.
    pub fn rewrite_dialogue(&mut self, dialogue: impl Into<String>) {
        self.dialogue = dialogue.into();
    }

    /// Whether the dialogue has been heard since the last reset.
    pub fn has_interacted(&self) -> bool {
        self.interacted
    }

    /// The current dialogue line.
    pub fn dialogue(&self) -> &str {
        &self.dialogue
    }
}

/// The characters of one Detective playthrough.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cast {
    bar_man: Character,
    boyfriend: Character,
    ex_best_friend: Character,
    receptionist: Character,
}

impl Cast {
    /// Build a fresh cast with the opening dialogue lines.
    pub fn assemble() -> Self {
        Self {
            bar_man: Character::new(
                CharacterKind::BarMan,
                "Ned(Bartender)",
                "He saw Valerie(Girlfriend) kissing another guy",
            ),
            boyfriend: Character::new(
                CharacterKind::Boyfriend,
                "John(Boyfriend)",
                "I can't believe she's missing.",
            ),
            ex_best_friend: Character::new(
                CharacterKind::ExBestFriend,
                "Samantha(Ex Best Friend)",
                "I seen her drop her bracelet at the bar",
            ),
            receptionist: Character::new(
                CharacterKind::Receptionist,
                "Linda(Receptionist)",
                "She didn't notice anything suspicious around the time of the murder.",
            ),
        }
    }

    /// Get a character by kind.
    pub fn get(&self, kind: CharacterKind) -> &Character {
        match kind {
            CharacterKind::BarMan => &self.bar_man,
            CharacterKind::Boyfriend => &self.boyfriend,
            CharacterKind::ExBestFriend => &self.ex_best_friend,
            CharacterKind::Receptionist => &self.receptionist,
        }
    }

    /// Get a mutable character by kind.
    pub fn get_mut(&mut self, kind: CharacterKind) -> &mut Character {
        match kind {
            CharacterKind::BarMan => &mut self.bar_man,
            CharacterKind::Boyfriend => &mut self.boyfriend,
            CharacterKind::ExBestFriend => &mut self.ex_best_friend,
            CharacterKind::Receptionist => &mut self.receptionist,
        }
    }

    /// Characters present in a room, in menu order.
    pub fn in_room(&self, room: RoomId) -> Vec<&Character> {
        [
            CharacterKind::Boyfriend,
            CharacterKind::ExBestFriend,
            CharacterKind::BarMan,
            CharacterKind::Receptionist,
        ]
        .into_iter()
        .filter(|kind| kind.home() == room)
        .map(|kind| self.get(kind))
        .collect()
    }

    /// The bracelet has been found: John now explains where it came from.
    pub fn reveal_bracelet(&mut self) {
        self.boyfriend.rewrite_dialogue(
            "I gave the bracelet to Valerie as an anniversary gift for when we met on the 22nd of April",
        );
        self.boyfriend.forget();
    }
}

impl Default for Cast {
    fn default() -> Self {
        Self::assemble()
    }
}
