//! Core types for Lonely Lodge: rooms, clues, tools, characters, and the
//! fixed content table of the lodge.
//!
//! This crate only holds data and the small behaviours attached to it. The
//! game state machine that drives a playthrough lives in `ll-story`.

/// Non-player characters and the cast of a Detective playthrough.
pub mod character;
/// The fixed lodge content: rooms, clue table, and tool table.
pub mod content;
/// Error types used throughout the crate.
pub mod error;
/// Clues and tools.
pub mod item;
/// Room identifiers and room records.
pub mod room;

pub use character::{Cast, Character, CharacterKind};
pub use content::{LOCATION_NAME, LodgeContent};
pub use error::{LodgeError, LodgeResult};
pub use item::{Clue, Tool, ToolKind};
pub use room::{Room, RoomId};
