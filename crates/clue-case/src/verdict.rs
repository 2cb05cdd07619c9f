//! Accusation resolution.

use serde::{Deserialize, Serialize};

use clue_core::{Catalog, EntityKind};

use crate::error::{AccusationField, CaseError, CaseResult};
use crate::generator::{Backstory, Case, Solution};

/// Outcome of a final accusation. The solution is always disclosed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    /// Whether suspect, weapon, and location all matched.
    pub correct: bool,
    /// The hidden solution.
    pub solution: Solution,
    /// Case summary told after the accusation.
    pub narrative: String,
}

impl Verdict {
    /// Short outcome title.
    pub fn headline(&self) -> &'static str {
        if self.correct {
            "Case solved"
        } else {
            "Case failed"
        }
    }
}

/// Check an accusation against `case`.
///
/// Every field must be a catalog entry of its kind; comparison is exact and
/// case-sensitive, with no partial credit.
pub(crate) fn resolve(
    catalog: &Catalog,
    case: &Case,
    suspect: &str,
    weapon: &str,
    location: &str,
) -> CaseResult<Verdict> {
    check_field(catalog, AccusationField::Suspect, EntityKind::Suspect, suspect)?;
    check_field(catalog, AccusationField::Weapon, EntityKind::Weapon, weapon)?;
    check_field(catalog, AccusationField::Location, EntityKind::Location, location)?;

    let solution = &case.solution;
    let correct =
        suspect == solution.culprit && weapon == solution.weapon && location == solution.location;

    Ok(Verdict {
        correct,
        solution: solution.clone(),
        narrative: narrative(solution, &case.backstory),
    })
}

fn check_field(
    catalog: &Catalog,
    field: AccusationField,
    kind: EntityKind,
    value: &str,
) -> CaseResult<()> {
    if value.trim().is_empty() {
        return Err(CaseError::InvalidAccusation {
            field,
            reason: "is missing".to_string(),
        });
    }
    if !catalog.contains(kind, value) {
        return Err(CaseError::InvalidAccusation {
            field,
            reason: format!("\"{value}\" is not a known {kind}"),
        });
    }
    Ok(())
}

fn narrative(solution: &Solution, backstory: &Backstory) -> String {
    format!(
        "The culprit, the {}, was tracked to the {}. They used the {} to commit the crime. \
         Witnesses reported suspicious movement near the {}. It happened during {}.",
        solution.culprit,
        solution.location,
        solution.weapon,
        backstory.secondary_location,
        backstory.conditions,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{ClueDensity, generate_case};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn fixture() -> (Catalog, Case) {
        let catalog = Catalog::night_city();
        let mut rng = StdRng::seed_from_u64(11);
        let case = generate_case(&catalog, ClueDensity::Standard, &mut rng);
        (catalog, case)
    }

    #[test]
    fn exact_match_is_correct() {
        let (catalog, case) = fixture();
        let s = case.solution.clone();
        let v = resolve(&catalog, &case, &s.culprit, &s.weapon, &s.location).unwrap();
        assert!(v.correct);
        assert_eq!(v.solution, s);
        assert_eq!(v.headline(), "Case solved");
    }

    #[test]
    fn single_field_deviation_fails_and_discloses() {
        let (catalog, case) = fixture();
        let s = case.solution.clone();
        let wrong_suspect = catalog
            .suspects()
            .iter()
            .find(|n| **n != s.culprit)
            .unwrap();
        let v = resolve(&catalog, &case, wrong_suspect, &s.weapon, &s.location).unwrap();
        assert!(!v.correct);
        assert_eq!(v.solution, s);
        assert_eq!(v.headline(), "Case failed");

        let wrong_location = catalog
            .locations()
            .iter()
            .find(|n| **n != s.location)
            .unwrap();
        let v = resolve(&catalog, &case, &s.culprit, &s.weapon, wrong_location).unwrap();
        assert!(!v.correct);
    }

    #[test]
    fn missing_field_is_invalid() {
        let (catalog, case) = fixture();
        let err = resolve(&catalog, &case, "Fixer", "", "Penthouse").unwrap_err();
        assert!(matches!(
            err,
            CaseError::InvalidAccusation {
                field: AccusationField::Weapon,
                ..
            }
        ));
        assert_eq!(err.to_string(), "invalid accusation: weapon is missing");
    }

    #[test]
    fn unknown_or_miscased_field_is_invalid() {
        let (catalog, case) = fixture();
        let err = resolve(&catalog, &case, "fixer", "Katana", "Penthouse").unwrap_err();
        assert!(matches!(
            err,
            CaseError::InvalidAccusation {
                field: AccusationField::Suspect,
                ..
            }
        ));

        let err = resolve(&catalog, &case, "Fixer", "Katana", "Moon").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid accusation: location \"Moon\" is not a known location"
        );
    }

    #[test]
    fn narrative_mentions_the_solution() {
        let (catalog, case) = fixture();
        let s = case.solution.clone();
        let v = resolve(&catalog, &case, &s.culprit, &s.weapon, &s.location).unwrap();
        assert!(v.narrative.contains(&s.culprit));
        assert!(v.narrative.contains(&s.weapon));
        assert!(v.narrative.contains(&s.location));
        assert!(v.narrative.contains(&case.backstory.secondary_location));
    }
}
