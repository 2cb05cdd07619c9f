use std::fmt;

use serde::{Deserialize, Serialize};

/// The kind of a catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    /// A person who may have committed the crime.
    Suspect,
    /// An object that may have been used for the crime.
    Weapon,
    /// A place where the crime may have happened.
    Location,
}

impl EntityKind {
    /// All kinds, in catalog order.
    pub const ALL: [EntityKind; 3] = [Self::Suspect, Self::Weapon, Self::Location];

    /// Try to parse a kind from a string (singular or plural).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "suspect" | "suspects" => Some(Self::Suspect),
            "weapon" | "weapons" => Some(Self::Weapon),
            "location" | "locations" | "area" | "areas" => Some(Self::Location),
            _ => None,
        }
    }

    /// Plural label, used for roster headings.
    pub fn plural(&self) -> &'static str {
        match self {
            Self::Suspect => "suspects",
            Self::Weapon => "weapons",
            Self::Location => "locations",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Suspect => write!(f, "suspect"),
            Self::Weapon => write!(f, "weapon"),
            Self::Location => write!(f, "location"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_plurals_and_aliases() {
        assert_eq!(EntityKind::parse("Suspect"), Some(EntityKind::Suspect));
        assert_eq!(EntityKind::parse("weapons"), Some(EntityKind::Weapon));
        assert_eq!(EntityKind::parse(" areas "), Some(EntityKind::Location));
        assert_eq!(EntityKind::parse("motive"), None);
    }

    #[test]
    fn display_and_plural() {
        assert_eq!(EntityKind::Weapon.to_string(), "weapon");
        assert_eq!(EntityKind::Location.plural(), "locations");
    }

    #[test]
    fn serde_uses_snake_case() {
        let json = serde_json::to_string(&EntityKind::Suspect).unwrap();
        assert_eq!(json, "\"suspect\"");
    }
}
