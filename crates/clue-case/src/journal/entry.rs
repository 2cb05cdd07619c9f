//! Journal entry types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single entry in the case log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum JournalEntry {
    /// A location was searched.
    LocationProbed {
        /// Turn number the probe used (1-based).
        turn: u32,
        /// The searched location.
        location: String,
        /// Texts of the clues found.
        clues: Vec<String>,
        /// When the probe was made.
        timestamp: DateTime<Utc>,
    },
    /// A suspect was questioned.
    SuspectQuestioned {
        /// Turn number the probe used (1-based).
        turn: u32,
        /// The questioned suspect.
        suspect: String,
        /// Texts of the clues found.
        clues: Vec<String>,
        /// When the probe was made.
        timestamp: DateTime<Utc>,
    },
    /// A weapon was traced.
    WeaponTraced {
        /// Turn number the probe used (1-based).
        turn: u32,
        /// The traced weapon.
        weapon: String,
        /// Texts of the clues found.
        clues: Vec<String>,
        /// When the probe was made.
        timestamp: DateTime<Utc>,
    },
    /// A detective's note.
    Note {
        /// The note text.
        text: String,
        /// When recorded.
        timestamp: DateTime<Utc>,
    },
}

impl JournalEntry {
    /// Clue texts recorded by this entry (empty for notes).
    pub fn clues(&self) -> &[String] {
        match self {
            Self::LocationProbed { clues, .. }
            | Self::SuspectQuestioned { clues, .. }
            | Self::WeaponTraced { clues, .. } => clues.as_slice(),
            Self::Note { .. } => &[],
        }
    }
}
