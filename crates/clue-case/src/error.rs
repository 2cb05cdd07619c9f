//! Error types for the investigation engine.

use std::fmt;

use thiserror::Error;

use clue_core::{CatalogError, EntityKind};

/// Result type for engine operations.
pub type CaseResult<T> = Result<T, CaseError>;

/// Which part of an accusation was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccusationField {
    /// The accused suspect.
    Suspect,
    /// The accused weapon.
    Weapon,
    /// The accused location.
    Location,
}

impl fmt::Display for AccusationField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Suspect => write!(f, "suspect"),
            Self::Weapon => write!(f, "weapon"),
            Self::Location => write!(f, "location"),
        }
    }
}

/// Errors that can occur during a case session.
#[derive(Debug, Error)]
pub enum CaseError {
    /// The turn budget is spent; only an accusation remains.
    #[error("no turns left ({limit} of {limit} used); make your accusation")]
    TurnsExhausted {
        /// The session's turn budget.
        limit: u32,
    },

    /// A probe named something that is not in the catalog.
    #[error("unknown {kind}: \"{name}\"")]
    UnknownEntity {
        /// The roster that was searched.
        kind: EntityKind,
        /// The name that was not found.
        name: String,
    },

    /// An accusation field is missing or not a catalog entry.
    #[error("invalid accusation: {field} {reason}")]
    InvalidAccusation {
        /// The offending field.
        field: AccusationField,
        /// Why it was rejected.
        reason: String,
    },

    /// Malformed player input.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The session configuration is unusable.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Catalog validation failed.
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
