pub mod catalog;
pub mod inspect;
pub mod play;

use std::path::Path;

use clue_case::{CaseConfig, ClueDensity, LeadPolicy, MatchPolicy};
use clue_core::Catalog;

/// Game rules collected from command-line flags.
pub struct Rules {
    pub seed: Option<u64>,
    pub turns: u32,
    pub varied: bool,
    pub consume_leads: bool,
    pub tagged: bool,
}

impl Rules {
    fn into_config(self) -> CaseConfig {
        CaseConfig::default()
            .with_optional_seed(self.seed)
            .with_turn_limit(self.turns)
            .with_density(density(self.varied))
            .with_lead_policy(if self.consume_leads {
                LeadPolicy::Consume
            } else {
                LeadPolicy::Peek
            })
            .with_match_policy(if self.tagged {
                MatchPolicy::Tagged
            } else {
                MatchPolicy::Substring
            })
    }
}

fn density(varied: bool) -> ClueDensity {
    if varied {
        ClueDensity::Varied
    } else {
        ClueDensity::Standard
    }
}

/// Load the catalog at `path`, or the built-in one.
fn load_catalog(path: Option<&Path>) -> Result<Catalog, String> {
    match path {
        Some(path) => Catalog::load(path).map_err(|e| format!("{}: {e}", path.display())),
        None => Ok(Catalog::night_city()),
    }
}
