//! Error types for the story engine.
//!
//! Player mistakes are not errors: they produce a message and the same
//! question again. These variants cover misuse of the session itself.

use thiserror::Error;

/// Result type for story operations.
pub type StoryResult<T> = Result<T, StoryError>;

/// Errors that can occur while driving a game session.
#[derive(Debug, Error)]
pub enum StoryError {
    /// Input arrived after the player quit.
    #[error("the session has been closed")]
    SessionClosed,

    /// An in-game phase was reached without a playthrough.
    #[error("no playthrough in progress")]
    NoPlaythrough,

    /// Lodge content lookup failed.
    #[error("{0}")]
    Lodge(#[from] ll_core::LodgeError),

    /// The journal could not be serialized.
    #[error("journal export failed: {0}")]
    Export(#[from] serde_json::Error),
}
