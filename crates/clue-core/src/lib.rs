//! Entity catalog for the Night City deduction game.
//!
//! A [`Catalog`] holds the three fixed rosters a case is drawn from:
//! suspects, weapons, and locations. Catalogs are validated once, at
//! construction, so the engine can rely on every roster having at least two
//! distinct entries.

/// The catalog of suspects, weapons, and locations.
pub mod catalog;
/// Entity kinds.
pub mod entity;
/// Error types used throughout the crate.
pub mod error;

/// Re-export the catalog.
pub use catalog::Catalog;
/// Re-export entity kinds.
pub use entity::EntityKind;
/// Re-export error types.
pub use error::{CatalogError, CatalogResult};
