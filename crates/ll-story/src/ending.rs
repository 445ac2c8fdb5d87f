//! Terminal outcomes of a playthrough.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::command::Answer;

/// How a playthrough ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ending {
    /// The Detective arrested the Boyfriend.
    CaseClosed,
    /// The Detective arrested anyone else.
    WrongArrest,
    /// The Murderer got away.
    Escaped,
    /// The Murderer was caught.
    Caught,
}

impl Ending {
    /// Whether the player won.
    pub fn is_win(self) -> bool {
        matches!(self, Self::CaseClosed | Self::Escaped)
    }

    /// Lines shown when the ending is reached.
    pub fn narration(self) -> &'static [&'static str] {
        match self {
            Self::CaseClosed => &[
                "You arrest John(Boyfriend) for the murder of Valerie",
                "Great Work!, Case closed!",
            ],
            Self::WrongArrest => {
                &["You have arrested the wrong person and the murderer has escaped!"]
            }
            Self::Escaped => &["You have Escaped!"],
            Self::Caught => &["You have been caught!"],
        }
    }

    /// Answer to "start a new game?". Only an explicit "no" stops.
    pub fn wants_restart(answer: Answer) -> bool {
        answer != Answer::No
    }
}

impl fmt::Display for Ending {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CaseClosed => write!(f, "case closed"),
            Self::WrongArrest => write!(f, "wrong arrest"),
            Self::Escaped => write!(f, "escaped"),
            Self::Caught => write!(f, "caught"),
        }
    }
}
