//! Command parsing for player input.
//!
//! Every menu takes a single letter, matched case-insensitively. The long
//! verb is accepted too.

/// A main-menu command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    /// Leave the game.
    Quit,
    /// Start the chosen role's story.
    Start,
    /// Resume the current playthrough.
    Continue,
    /// List the clues found so far (Detective only).
    ReviewClues,
    /// Throw the playthrough away and choose a role again.
    NewGame,
    /// Anything else.
    Unknown,
}

/// An in-game Detective command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectiveAction {
    /// Back to the main menu.
    Menu,
    /// Talk to someone in the room.
    Interact,
    /// Search the room for a clue.
    Examine,
    /// List the clues found so far.
    ReviewClues,
    /// Pick any room to go to.
    MoveToRoom,
    /// Accuse a suspect.
    Arrest,
    /// Anything else.
    Unknown,
}

/// An in-game Murderer command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MurdererAction {
    /// Back to the main menu.
    Menu,
    /// Search the room for a tool.
    Examine,
    /// Use one of the tools found so far.
    UseTool,
    /// Step toward the party.
    Forward,
    /// Step back toward the couple's room.
    Back,
    /// Anything else.
    Unknown,
}

/// Answer to a yes/no question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    /// "yes", any case.
    Yes,
    /// "no", any case.
    No,
    /// Anything else. Each question decides what that means.
    Other,
}

const QUIT_VERBS: &[&str] = &["q", "quit"];
const START_VERBS: &[&str] = &["s", "start"];
const CONTINUE_VERBS: &[&str] = &["c", "continue"];
const REVIEW_VERBS: &[&str] = &["r", "review"];
const NEW_GAME_VERBS: &[&str] = &["n", "new"];
const INTERACT_VERBS: &[&str] = &["i", "interact", "talk"];
const EXAMINE_VERBS: &[&str] = &["e", "examine"];
const MOVE_VERBS: &[&str] = &["m", "move"];
const ARREST_VERBS: &[&str] = &["a", "arrest"];
const USE_VERBS: &[&str] = &["u", "use"];
const FORWARD_VERBS: &[&str] = &["f", "forward"];
const BACK_VERBS: &[&str] = &["b", "back"];

fn normalize(input: &str) -> String {
    input.trim().to_lowercase()
}

impl MenuCommand {
    /// Parse a main-menu command.
    pub fn parse(input: &str) -> Self {
        let verb = normalize(input);
        let verb = verb.as_str();
        if QUIT_VERBS.contains(&verb) {
            Self::Quit
        } else if START_VERBS.contains(&verb) {
            Self::Start
        } else if CONTINUE_VERBS.contains(&verb) {
            Self::Continue
        } else if REVIEW_VERBS.contains(&verb) {
            Self::ReviewClues
        } else if NEW_GAME_VERBS.contains(&verb) {
            Self::NewGame
        } else {
            Self::Unknown
        }
    }
}

impl DetectiveAction {
    /// Parse an in-game Detective command.
    pub fn parse(input: &str) -> Self {
        let verb = normalize(input);
        let verb = verb.as_str();
        if QUIT_VERBS.contains(&verb) {
            Self::Menu
        } else if INTERACT_VERBS.contains(&verb) {
            Self::Interact
        } else if EXAMINE_VERBS.contains(&verb) {
            Self::Examine
        } else if REVIEW_VERBS.contains(&verb) {
            Self::ReviewClues
        } else if MOVE_VERBS.contains(&verb) {
            Self::MoveToRoom
        } else if ARREST_VERBS.contains(&verb) {
            Self::Arrest
        } else {
            Self::Unknown
        }
    }
}

impl MurdererAction {
    /// Parse an in-game Murderer command.
    pub fn parse(input: &str) -> Self {
        let verb = normalize(input);
        let verb = verb.as_str();
        if QUIT_VERBS.contains(&verb) {
            Self::Menu
        } else if EXAMINE_VERBS.contains(&verb) {
            Self::Examine
        } else if USE_VERBS.contains(&verb) {
            Self::UseTool
        } else if FORWARD_VERBS.contains(&verb) {
            Self::Forward
        } else if BACK_VERBS.contains(&verb) {
            Self::Back
        } else {
            Self::Unknown
        }
    }
}

impl Answer {
    /// Parse a yes/no answer.
    pub fn parse(input: &str) -> Self {
        match normalize(input).as_str() {
            "yes" => Self::Yes,
            "no" => Self::No,
            _ => Self::Other,
        }
    }
}

/// Parse a 1-based menu number into a 0-based slot.
pub fn parse_slot(input: &str) -> Option<usize> {
    input.trim().parse::<usize>().ok()?.checked_sub(1)
}
