//! Game state machine for Lonely Lodge.
//!
//! A [`GameSession`] owns the lodge content and the state of the current
//! playthrough. The front end feeds it one line of player input at a time
//! through [`GameSession::process`] and prints the lines it returns, then
//! shows [`GameSession::prompt`] for the next question. Every nested
//! question (room number, safe code, restart confirmation) is a [`Phase`]
//! of the machine, so bad input re-enters a phase instead of recursing.

/// Player command parsing.
pub mod command;
/// Session configuration.
pub mod config;
/// Terminal outcomes of a playthrough.
pub mod ending;
/// Error types for the story engine.
pub mod error;
/// Chronological log of what happened during a session.
pub mod journal;
/// The game session and its action handlers.
pub mod session;
/// Per-playthrough state.
pub mod state;

pub use command::{Answer, DetectiveAction, MenuCommand, MurdererAction};
pub use config::StoryConfig;
pub use ending::Ending;
pub use error::{StoryError, StoryResult};
pub use journal::{Journal, JournalEntry};
pub use session::{GameSession, Phase};
pub use state::{PlayState, Role, Victim};
