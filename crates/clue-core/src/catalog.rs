use std::collections::HashSet;
use std::path::Path;

use rand::Rng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::entity::EntityKind;
use crate::error::{CatalogError, CatalogResult};

/// Minimum roster size. A false clue substitutes a different entry of the
/// same kind, so every roster needs at least one alternative.
pub const MIN_ENTRIES: usize = 2;

/// The fixed rosters a case is drawn from.
///
/// Only constructed through [`Catalog::new`] (or the loaders built on it), so
/// every instance holds at least [`MIN_ENTRIES`] distinct, non-blank names
/// per roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Catalog {
    suspects: Vec<String>,
    weapons: Vec<String>,
    locations: Vec<String>,
}

/// On-disk shape of a catalog file.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    suspects: Vec<String>,
    weapons: Vec<String>,
    locations: Vec<String>,
}

impl Catalog {
    /// Build a catalog, rejecting rosters that are too small, blank, or
    /// contain duplicates.
    pub fn new<S, W, L>(suspects: S, weapons: W, locations: L) -> CatalogResult<Self>
    where
        S: IntoIterator,
        S::Item: Into<String>,
        W: IntoIterator,
        W::Item: Into<String>,
        L: IntoIterator,
        L::Item: Into<String>,
    {
        let catalog = Self {
            suspects: suspects.into_iter().map(Into::into).collect(),
            weapons: weapons.into_iter().map(Into::into).collect(),
            locations: locations.into_iter().map(Into::into).collect(),
        };
        for kind in EntityKind::ALL {
            validate_roster(kind, catalog.entries(kind))?;
        }
        for (name, container) in catalog.ambiguous_names() {
            tracing::warn!(
                name,
                container,
                "catalog name is a substring of another entry; substring clue matching may misfire"
            );
        }
        Ok(catalog)
    }

    /// The built-in Night City tower catalog.
    pub fn night_city() -> Self {
        Self {
            suspects: to_owned(&[
                "Netrunner",
                "Security Chief",
                "Fixer",
                "Mercenary",
                "Investigator",
            ]),
            weapons: to_owned(&["Mantis Blades", "Monowire", "Knife", "Katana", "Pistol"]),
            locations: to_owned(&[
                "Biotech Lab",
                "Surveillance Room",
                "Penthouse",
                "Cafeteria",
                "Prototype Workshop",
            ]),
        }
    }

    /// Parse and validate a catalog from JSON:
    /// `{"suspects": [...], "weapons": [...], "locations": [...]}`.
    pub fn from_json(json: &str) -> CatalogResult<Self> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Self::new(file.suspects, file.weapons, file.locations)
    }

    /// Read, parse, and validate a JSON catalog file.
    pub fn load(path: &Path) -> CatalogResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// All suspects, in catalog order.
    pub fn suspects(&self) -> &[String] {
        &self.suspects
    }

    /// All weapons, in catalog order.
    pub fn weapons(&self) -> &[String] {
        &self.weapons
    }

    /// All locations, in catalog order.
    pub fn locations(&self) -> &[String] {
        &self.locations
    }

    /// The roster for a given kind.
    pub fn entries(&self, kind: EntityKind) -> &[String] {
        match kind {
            EntityKind::Suspect => &self.suspects,
            EntityKind::Weapon => &self.weapons,
            EntityKind::Location => &self.locations,
        }
    }

    /// Whether `name` is an entry of the given roster (case-sensitive).
    pub fn contains(&self, kind: EntityKind, name: &str) -> bool {
        self.entries(kind).iter().any(|e| e == name)
    }

    /// Pick an entry of `kind` uniformly at random.
    pub fn random<'a>(&'a self, kind: EntityKind, rng: &mut StdRng) -> &'a str {
        let entries = self.entries(kind);
        &entries[rng.random_range(0..entries.len())]
    }

    /// Pick an entry of `kind` uniformly at random, excluding `exclude`.
    ///
    /// If `exclude` is not in the roster, every entry is a candidate.
    pub fn random_other<'a>(
        &'a self,
        kind: EntityKind,
        exclude: &str,
        rng: &mut StdRng,
    ) -> &'a str {
        let entries = self.entries(kind);
        match entries.iter().position(|e| e == exclude) {
            Some(skip) => {
                let mut idx = rng.random_range(0..entries.len() - 1);
                if idx >= skip {
                    idx += 1;
                }
                &entries[idx]
            }
            None => &entries[rng.random_range(0..entries.len())],
        }
    }

    /// Suspect and weapon names that occur inside another catalog entry,
    /// as `(name, containing entry)` pairs.
    pub fn ambiguous_names(&self) -> Vec<(&str, &str)> {
        let all: Vec<&str> = EntityKind::ALL
            .iter()
            .flat_map(|k| self.entries(*k).iter().map(String::as_str))
            .collect();
        let mut found = Vec::new();
        for name in self.suspects.iter().chain(&self.weapons) {
            for other in &all {
                if *other != name && other.contains(name.as_str()) {
                    found.push((name.as_str(), *other));
                }
            }
        }
        found
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::night_city()
    }
}

fn to_owned(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

fn validate_roster(kind: EntityKind, entries: &[String]) -> CatalogResult<()> {
    if entries.len() < MIN_ENTRIES {
        return Err(CatalogError::TooSmall {
            kind,
            found: entries.len(),
        });
    }
    let mut seen = HashSet::new();
    for name in entries {
        if name.trim().is_empty() {
            return Err(CatalogError::BlankName(kind));
        }
        if name.trim() != name {
            return Err(CatalogError::PaddedName {
                kind,
                name: name.clone(),
            });
        }
        if !seen.insert(name.as_str()) {
            return Err(CatalogError::Duplicate {
                kind,
                name: name.clone(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn tiny() -> Catalog {
        Catalog::new(["A", "B"], ["W1", "W2"], ["L1", "L2"]).unwrap()
    }

    #[test]
    fn night_city_is_valid() {
        let built = Catalog::night_city();
        let validated = Catalog::new(
            built.suspects().to_vec(),
            built.weapons().to_vec(),
            built.locations().to_vec(),
        )
        .unwrap();
        assert_eq!(built, validated);
        assert_eq!(built.suspects().len(), 5);
        assert!(built.ambiguous_names().is_empty());
    }

    #[test]
    fn rejects_single_entry_roster() {
        let err = Catalog::new(["A"], ["W1", "W2"], ["L1", "L2"]).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::TooSmall {
                kind: EntityKind::Suspect,
                found: 1
            }
        ));
    }

    #[test]
    fn rejects_empty_roster() {
        let err = Catalog::new(["A", "B"], Vec::<String>::new(), ["L1", "L2"]).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::TooSmall {
                kind: EntityKind::Weapon,
                found: 0
            }
        ));
    }

    #[test]
    fn rejects_duplicates() {
        let err = Catalog::new(["A", "B"], ["W1", "W2"], ["L1", "L1"]).unwrap_err();
        assert_eq!(err.to_string(), "duplicate location: \"L1\"");
    }

    #[test]
    fn rejects_blank_names() {
        let err = Catalog::new(["A", "  "], ["W1", "W2"], ["L1", "L2"]).unwrap_err();
        assert!(matches!(err, CatalogError::BlankName(EntityKind::Suspect)));
        assert_eq!(err.to_string(), "blank suspect name");
    }

    #[test]
    fn rejects_padded_names() {
        let err = Catalog::new(["A", "B"], ["W1", "W2"], [" Lab", "L2"]).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::PaddedName {
                kind: EntityKind::Location,
                ..
            }
        ));
        assert_eq!(
            err.to_string(),
            "location name has surrounding whitespace: \" Lab\""
        );

        let err = Catalog::new(["A", "B "], ["W1", "W2"], ["L1", "L2"]).unwrap_err();
        assert!(matches!(err, CatalogError::PaddedName { .. }));
    }

    #[test]
    fn contains_is_case_sensitive() {
        let c = tiny();
        assert!(c.contains(EntityKind::Weapon, "W1"));
        assert!(!c.contains(EntityKind::Weapon, "w1"));
        assert!(!c.contains(EntityKind::Suspect, "W1"));
    }

    #[test]
    fn random_other_never_returns_excluded() {
        let c = Catalog::night_city();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            assert_ne!(c.random_other(EntityKind::Weapon, "Katana", &mut rng), "Katana");
        }
    }

    #[test]
    fn random_other_reaches_every_alternative() {
        let c = Catalog::night_city();
        let mut rng = StdRng::seed_from_u64(1);
        let mut seen = HashSet::new();
        for _ in 0..500 {
            seen.insert(c.random_other(EntityKind::Suspect, "Fixer", &mut rng));
        }
        assert_eq!(seen.len(), 4, "missing alternatives: {seen:?}");
    }

    #[test]
    fn random_other_with_two_entries_is_forced() {
        let c = tiny();
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..50 {
            assert_eq!(c.random_other(EntityKind::Location, "L1", &mut rng), "L2");
        }
    }

    #[test]
    fn ambiguous_names_detected() {
        let c =
            Catalog::new(["Exec", "Guard"], ["W1", "W2"], ["Executive Suite", "Lobby"]).unwrap();
        assert_eq!(c.ambiguous_names(), vec![("Exec", "Executive Suite")]);
    }

    #[test]
    fn from_json_validates() {
        let json = r#"{"suspects": ["A", "B"], "weapons": ["W1", "W2"], "locations": ["L1", "L2"]}"#;
        assert_eq!(Catalog::from_json(json).unwrap(), tiny());

        let small = r#"{"suspects": ["A"], "weapons": ["W1", "W2"], "locations": ["L1", "L2"]}"#;
        assert!(matches!(
            Catalog::from_json(small),
            Err(CatalogError::TooSmall { .. })
        ));

        assert!(matches!(
            Catalog::from_json("{not json"),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn load_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        std::fs::write(
            &path,
            r#"{"suspects": ["A", "B"], "weapons": ["W1", "W2"], "locations": ["L1", "L2"]}"#,
        )
        .unwrap();
        assert_eq!(Catalog::load(&path).unwrap(), tiny());
        assert!(matches!(
            Catalog::load(&dir.path().join("missing.json")),
            Err(CatalogError::Io(_))
        ));
    }
}
