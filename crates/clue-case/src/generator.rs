//! Case generation.
//!
//! Draws the hidden solution, guarantees a solvable minimum of true clues,
//! pads every location with misleading ones, and shuffles each pool so reveal
//! order says nothing about truth.

use std::fmt;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use clue_core::{Catalog, EntityKind};

use crate::clue::{Clue, ClueFamily, synthesize};
use crate::matcher::MatchPolicy;

/// False clues scattered by [`ClueDensity::Standard`].
pub const STANDARD_FALSE_CLUES: usize = 8;

/// Ambient conditions a crime can happen under.
pub const CONDITIONS: &[&str] = &["a storm", "a silent night", "a cloudy evening"];

/// How many clues the generator scatters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClueDensity {
    /// Exactly the four guaranteed true clues and 8 false ones.
    #[default]
    Standard,
    /// The four guaranteed true clues, 0-1 extra true clues anywhere, and
    /// 6-9 false clues.
    Varied,
}

/// The hidden answer to a case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    /// Who did it.
    pub culprit: String,
    /// What they used.
    pub weapon: String,
    /// Where it happened.
    pub location: String,
}

impl Solution {
    /// The solution's entity of the given kind.
    pub fn entity(&self, kind: EntityKind) -> &str {
        match kind {
            EntityKind::Suspect => &self.culprit,
            EntityKind::Weapon => &self.weapon,
            EntityKind::Location => &self.location,
        }
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "the {} with the {} in the {}",
            self.culprit, self.weapon, self.location
        )
    }
}

/// Narrative details drawn alongside the solution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Backstory {
    /// A location other than the crime scene where movement was reported.
    pub secondary_location: String,
    /// When it happened.
    pub conditions: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct CluePool {
    location: String,
    clues: Vec<Clue>,
}

/// Clues per location, in catalog location order.
///
/// Every catalog location has a pool, possibly empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClueDistribution {
    pools: Vec<CluePool>,
}

impl ClueDistribution {
    fn new(locations: &[String]) -> Self {
        Self {
            pools: locations
                .iter()
                .map(|location| CluePool {
                    location: location.clone(),
                    clues: Vec::new(),
                })
                .collect(),
        }
    }

    fn pool_mut(&mut self, location: &str) -> Option<&mut Vec<Clue>> {
        self.pools
            .iter_mut()
            .find(|p| p.location == location)
            .map(|p| &mut p.clues)
    }

    fn push(&mut self, clue: Clue) {
        if let Some(pool) = self.pool_mut(&clue.location) {
            pool.push(clue);
        }
    }

    fn shuffle(&mut self, rng: &mut StdRng) {
        for pool in &mut self.pools {
            pool.clues.shuffle(rng);
        }
    }

    /// Remaining clues at `location`, in reveal order.
    pub fn pool(&self, location: &str) -> Option<&[Clue]> {
        self.pools
            .iter()
            .find(|p| p.location == location)
            .map(|p| p.clues.as_slice())
    }

    /// Iterate `(location, clues)` in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Clue])> {
        self.pools
            .iter()
            .map(|p| (p.location.as_str(), p.clues.as_slice()))
    }

    /// Number of clues left across all locations.
    pub fn total(&self) -> usize {
        self.pools.iter().map(|p| p.clues.len()).sum()
    }

    /// Number of true clues left across all locations.
    pub fn true_count(&self) -> usize {
        self.pools
            .iter()
            .flat_map(|p| &p.clues)
            .filter(|c| c.is_true)
            .count()
    }

    /// Remove and return up to `n` clues from the front of a pool.
    pub(crate) fn take_front(&mut self, location: &str, n: usize) -> Vec<Clue> {
        match self.pool_mut(location) {
            Some(pool) => {
                let n = n.min(pool.len());
                pool.drain(..n).collect()
            }
            None => Vec::new(),
        }
    }

    /// Collect up to `limit` clues matching `name`, scanning pools in catalog
    /// order. Matched clues are removed only when `consume` is set.
    pub(crate) fn find_leads(
        &mut self,
        name: &str,
        policy: MatchPolicy,
        limit: usize,
        consume: bool,
    ) -> Vec<Clue> {
        let mut found = Vec::new();
        for pool in &mut self.pools {
            let mut i = 0;
            while i < pool.clues.len() && found.len() < limit {
                if policy.matches(&pool.clues[i], name) {
                    if consume {
                        found.push(pool.clues.remove(i));
                        continue;
                    }
                    found.push(pool.clues[i].clone());
                }
                i += 1;
            }
            if found.len() >= limit {
                break;
            }
        }
        found
    }
}

/// A generated case: the hidden solution and the clues to find it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Case {
    /// The hidden answer.
    pub solution: Solution,
    /// Clues per location.
    pub distribution: ClueDistribution,
    /// Narrative details for the verdict.
    pub backstory: Backstory,
}

/// Generate a solvable case from `catalog`.
///
/// The crime scene always holds a true Physical and a true Item clue about
/// the weapon, and one other location holds a true Access and a true Social
/// clue about the culprit.
pub fn generate_case(catalog: &Catalog, density: ClueDensity, rng: &mut StdRng) -> Case {
    let solution = Solution {
        culprit: catalog.random(EntityKind::Suspect, rng).to_string(),
        weapon: catalog.random(EntityKind::Weapon, rng).to_string(),
        location: catalog.random(EntityKind::Location, rng).to_string(),
    };

    let mut distribution = ClueDistribution::new(catalog.locations());

    let scene = solution.location.as_str();
    for family in [ClueFamily::Physical, ClueFamily::Item] {
        distribution.push(synthesize(
            catalog,
            family,
            scene,
            &solution.weapon,
            true,
            rng,
        ));
    }
    let witness_area = catalog
        .random_other(EntityKind::Location, scene, rng)
        .to_string();
    for family in [ClueFamily::Access, ClueFamily::Social] {
        distribution.push(synthesize(
            catalog,
            family,
            &witness_area,
            &solution.culprit,
            true,
            rng,
        ));
    }

    let (extra_true, false_count) = match density {
        ClueDensity::Standard => (0, STANDARD_FALSE_CLUES),
        ClueDensity::Varied => (rng.random_range(0..=1), rng.random_range(6..=9)),
    };
    for _ in 0..extra_true {
        distribution.push(random_clue(catalog, &solution, true, rng));
    }
    for _ in 0..false_count {
        distribution.push(random_clue(catalog, &solution, false, rng));
    }

    distribution.shuffle(rng);

    let backstory = Backstory {
        secondary_location: catalog
            .random_other(EntityKind::Location, scene, rng)
            .to_string(),
        conditions: CONDITIONS[rng.random_range(0..CONDITIONS.len())].to_string(),
    };

    tracing::debug!(
        total = distribution.total(),
        true_clues = distribution.true_count(),
        ?density,
        "generated case"
    );

    Case {
        solution,
        distribution,
        backstory,
    }
}

/// Generate the case a session seeded with `seed` would open with.
pub fn generate_seeded(catalog: &Catalog, density: ClueDensity, seed: u64) -> Case {
    let mut rng = StdRng::seed_from_u64(seed);
    generate_case(catalog, density, &mut rng)
}

/// A clue of random family at a random location.
fn random_clue(catalog: &Catalog, solution: &Solution, is_true: bool, rng: &mut StdRng) -> Clue {
    let family = ClueFamily::ALL[rng.random_range(0..ClueFamily::ALL.len())];
    let area = catalog.random(EntityKind::Location, rng).to_string();
    let entity = solution.entity(family.subject_kind());
    synthesize(catalog, family, &area, entity, is_true, rng)
}
