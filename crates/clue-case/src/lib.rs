//! Mystery generation and investigation engine.
//!
//! A [`CaseSession`] hides a solution (culprit, weapon, location), scatters
//! true and misleading clues across the catalog's locations, and lets the
//! player spend a bounded number of probes uncovering them before making a
//! final accusation. Everything is synchronous and deterministic for a given
//! seed.

pub mod clue;
pub mod config;
pub mod error;
pub mod generator;
pub mod journal;
pub mod matcher;
pub mod session;
pub mod verdict;

pub use clue::{Clue, ClueFamily};
pub use config::{CaseConfig, LeadPolicy};
pub use error::{AccusationField, CaseError, CaseResult};
pub use generator::{
    Backstory, Case, ClueDensity, ClueDistribution, Solution, generate_case, generate_seeded,
};
pub use matcher::MatchPolicy;
pub use session::{CaseSession, LeadReport, LocationReport, SessionId};
pub use verdict::Verdict;

pub use clue_core::{Catalog, CatalogError, EntityKind};
