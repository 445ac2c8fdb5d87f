//! Chronological log of a session.
//!
//! Spans every playthrough of one process run. It lives in memory only and
//! is rendered as text or JSON on request.

use chrono::{DateTime, Utc};
use ll_core::{CharacterKind, RoomId, ToolKind};
use serde::{Deserialize, Serialize};

use crate::ending::Ending;
use crate::error::StoryResult;
use crate::state::{Role, Victim};

/// A single entry in the session journal.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum JournalEntry {
    /// A role and name were chosen.
    PlaythroughStarted {
        /// Playthrough number, from 1.
        number: u32,
        /// The chosen role.
        role: Role,
        /// The player's character name.
        name: String,
        /// When it started.
        timestamp: DateTime<Utc>,
    },
    /// The player changed rooms.
    Moved {
        /// Room left.
        from: RoomId,
        /// Room entered.
        to: RoomId,
        /// When.
        timestamp: DateTime<Utc>,
    },
    /// The Detective found a clue.
    ClueFound {
        /// Clue name.
        clue: String,
        /// Where it was found.
        room: RoomId,
        /// When.
        timestamp: DateTime<Utc>,
    },
    /// The Murderer found a tool.
    ToolFound {
        /// Which tool.
        tool: ToolKind,
        /// Where it was found.
        room: RoomId,
        /// When.
        timestamp: DateTime<Utc>,
    },
    /// A tool had an effect.
    ToolUsed {
        /// Which tool.
        tool: ToolKind,
        /// Where it was used.
        room: RoomId,
        /// When.
        timestamp: DateTime<Utc>,
    },
    /// A character said their line.
    Spoke {
        /// Who spoke.
        character: CharacterKind,
        /// What was shown.
        line: String,
        /// When.
        timestamp: DateTime<Utc>,
    },
    /// Valerie's condition changed.
    VictimChanged {
        /// New condition.
        victim: Victim,
        /// Where it happened.
        room: RoomId,
        /// When.
        timestamp: DateTime<Utc>,
    },
    /// A playthrough ended.
    Ended {
        /// The outcome.
        ending: Ending,
        /// When.
        timestamp: DateTime<Utc>,
    },
}

/// A chronological log of session events.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Journal {
    entries: Vec<JournalEntry>,
}

impl Journal {
    /// Create an empty journal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry to the journal.
    pub fn append(&mut self, entry: JournalEntry) {
        self.entries.push(entry);
    }

    /// Get all entries.
    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the journal is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Endings reached, in order.
    pub fn endings(&self) -> Vec<Ending> {
        self.entries
            .iter()
            .filter_map(|e| match e {
                JournalEntry::Ended { ending, .. } => Some(*ending),
                _ => None,
            })
            .collect()
    }

    /// Export the journal as plain text, one line per entry.
    pub fn export_text(&self) -> String {
        let mut out = String::from("Lonely Lodge Journal\n");
        for entry in &self.entries {
            let line = match entry {
                JournalEntry::PlaythroughStarted {
                    number, role, name, ..
                } => format!("\n== Playthrough {number}: {role} {name} =="),
                JournalEntry::Moved { from, to, .. } => {
                    format!("  moved from {from} to {to}")
                }
                JournalEntry::ClueFound { clue, room, .. } => {
                    format!("  found clue '{clue}' in {room}")
                }
                JournalEntry::ToolFound { tool, room, .. } => {
                    format!("  found {tool:?} in {room}")
                }
                JournalEntry::ToolUsed { tool, room, .. } => {
                    format!("  used {tool:?} in {room}")
                }
                JournalEntry::Spoke { line, .. } => format!("  heard \"{line}\""),
                JournalEntry::VictimChanged { victim, room, .. } => {
                    format!("  victim is now {victim:?} ({room})")
                }
                JournalEntry::Ended { ending, .. } => format!("  ending: {ending}"),
            };
            out.push_str(&line);
            out.push('\n');
        }
        out
    }

    /// Export the journal as pretty-printed JSON.
    pub fn export_json(&self) -> StoryResult<String> {
        Ok(serde_json::to_string_pretty(&self.entries)?)
    }
}
