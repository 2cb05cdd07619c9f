//! Clue synthesis.
//!
//! Four clue families, each rendering a sentence that ties one entity to one
//! location. True clues name the given entity; false clues name a different
//! entity of the same kind, picked uniformly from the rest of the roster.

use std::fmt;

use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use clue_core::{Catalog, EntityKind};

/// The template family a clue was rendered from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClueFamily {
    /// Trace evidence tying a weapon to a location.
    Physical,
    /// An object found in a location, tied to a weapon.
    Item,
    /// Access-log evidence tying a suspect to a location.
    Access,
    /// Witness or rumor evidence tying a suspect to a location.
    Social,
}

impl ClueFamily {
    /// All families.
    pub const ALL: [ClueFamily; 4] = [Self::Physical, Self::Item, Self::Access, Self::Social];

    /// The kind of entity this family's clues name.
    pub fn subject_kind(&self) -> EntityKind {
        match self {
            Self::Physical | Self::Item => EntityKind::Weapon,
            Self::Access | Self::Social => EntityKind::Suspect,
        }
    }
}

impl fmt::Display for ClueFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Physical => write!(f, "Physical"),
            Self::Item => write!(f, "Item"),
            Self::Access => write!(f, "Access"),
            Self::Social => write!(f, "Social"),
        }
    }
}

/// A piece of evidence sitting in one location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clue {
    /// The sentence shown to the player.
    pub text: String,
    /// Whether `mentions` matches the solution's entity of the same kind.
    pub is_true: bool,
    /// Template family.
    pub family: ClueFamily,
    /// Location the clue is stored in.
    pub location: String,
    /// The entity named in `text`.
    pub mentions: String,
}

/// Render a clue of `family` at `location` about `entity`.
///
/// When `is_true` is false the rendered text names a different entry of the
/// same kind instead; `entity` itself never appears as the subject.
pub fn synthesize(
    catalog: &Catalog,
    family: ClueFamily,
    location: &str,
    entity: &str,
    is_true: bool,
    rng: &mut StdRng,
) -> Clue {
    let mentions = if is_true {
        entity.to_string()
    } else {
        catalog
            .random_other(family.subject_kind(), entity, rng)
            .to_string()
    };
    let text = render(family, location, &mentions, is_true);
    Clue {
        text,
        is_true,
        family,
        location: location.to_string(),
        mentions,
    }
}

/// Template text for a family; `subject` is already the entity to name.
fn render(family: ClueFamily, location: &str, subject: &str, is_true: bool) -> String {
    match (family, is_true) {
        (ClueFamily::Physical, true) => {
            format!("Traces in the {location} suggest a {subject} was used.")
        }
        (ClueFamily::Physical, false) => format!(
            "Marks in the {location} look like they came from a {subject}, but it's not conclusive."
        ),
        (ClueFamily::Item, true) => {
            format!("An object linked to the {subject} was recovered inside the {location}.")
        }
        (ClueFamily::Item, false) => format!(
            "There is an object in the {location} that seems tied to a {subject}, though nothing is definitive."
        ),
        (ClueFamily::Access, true) => format!(
            "Access logs show recent activity from someone matching the {subject} in the {location}."
        ),
        (ClueFamily::Access, false) => {
            format!("It seems the {subject} was in the {location}, although there's no certainty.")
        }
        (ClueFamily::Social, true) => {
            format!("A witness saw someone resembling the {subject} near the {location}.")
        }
        (ClueFamily::Social, false) => {
            format!("Rumor has it the {subject} was near the {location}, but nobody is sure.")
        }
    }
}
