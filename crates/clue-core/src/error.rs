use crate::entity::EntityKind;

/// Alias for `Result<T, CatalogError>`.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors raised while building or loading a catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// A roster has fewer than two entries, so no wrong entity can be
    /// substituted into a false clue.
    #[error("{kind} roster needs at least 2 entries, found {found}")]
    TooSmall {
        /// The roster that is too small.
        kind: EntityKind,
        /// How many entries it had.
        found: usize,
    },

    /// The same name appears twice in one roster.
    #[error("duplicate {kind}: \"{name}\"")]
    Duplicate {
        /// The roster containing the duplicate.
        kind: EntityKind,
        /// The repeated name.
        name: String,
    },

    /// An entry is empty or whitespace only.
    #[error("blank {0} name")]
    BlankName(EntityKind),

    /// An entry has leading or trailing whitespace.
    #[error("{kind} name has surrounding whitespace: \"{name}\"")]
    PaddedName {
        /// The roster containing the entry.
        kind: EntityKind,
        /// The entry as written.
        name: String,
    },

    /// The catalog file could not be parsed.
    #[error("invalid catalog: {0}")]
    Parse(#[from] serde_json::Error),

    /// The catalog file could not be read.
    #[error("cannot read catalog: {0}")]
    Io(#[from] std::io::Error),
}
