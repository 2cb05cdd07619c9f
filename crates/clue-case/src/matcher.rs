//! Lead matching for subject and weapon probes.

use serde::{Deserialize, Serialize};

use crate::clue::Clue;

/// How a subject or weapon probe decides that a clue is about its target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchPolicy {
    /// The clue's text contains the name. Can misfire when one catalog name
    /// is a substring of another.
    #[default]
    Substring,
    /// The clue's `mentions` tag equals the name exactly.
    Tagged,
}

impl MatchPolicy {
    /// Whether `clue` is a lead on `name`.
    pub fn matches(&self, clue: &Clue, name: &str) -> bool {
        match self {
            Self::Substring => clue.text.contains(name),
            Self::Tagged => clue.mentions == name,
        }
    }
}
