//! Configuration for a case session.

use serde::{Deserialize, Serialize};

use crate::generator::ClueDensity;
use crate::matcher::MatchPolicy;

/// Canonical number of probes per case.
pub const DEFAULT_TURN_LIMIT: u32 = 10;

/// Whether subject and weapon probes remove the clues they reveal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LeadPolicy {
    /// Matched clues stay in their pools and can be found again by a
    /// location probe.
    #[default]
    Peek,
    /// Matched clues are removed from their pools, like a location probe.
    Consume,
}

/// Configuration for a case session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseConfig {
    /// RNG seed for a reproducible case. `None` draws one from OS entropy.
    pub seed: Option<u64>,
    /// Number of probes allowed before the accusation is forced.
    pub turn_limit: u32,
    /// How many clues the generator scatters.
    pub density: ClueDensity,
    /// Consumption behavior of subject and weapon probes.
    pub lead_policy: LeadPolicy,
    /// How subject and weapon probes recognize a lead.
    pub match_policy: MatchPolicy,
}

impl Default for CaseConfig {
    fn default() -> Self {
        Self {
            seed: None,
            turn_limit: DEFAULT_TURN_LIMIT,
            density: ClueDensity::Standard,
            lead_policy: LeadPolicy::Peek,
            match_policy: MatchPolicy::Substring,
        }
    }
}

impl CaseConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set or clear the RNG seed.
    pub fn with_optional_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Set the turn budget. Validated when the session is created.
    pub fn with_turn_limit(mut self, turns: u32) -> Self {
        self.turn_limit = turns;
        self
    }

    /// Set the clue density policy.
    pub fn with_density(mut self, density: ClueDensity) -> Self {
        self.density = density;
        self
    }

    /// Set the lead consumption policy.
    pub fn with_lead_policy(mut self, policy: LeadPolicy) -> Self {
        self.lead_policy = policy;
        self
    }

    /// Set the lead matching policy.
    pub fn with_match_policy(mut self, policy: MatchPolicy) -> Self {
        self.match_policy = policy;
        self
    }
}
