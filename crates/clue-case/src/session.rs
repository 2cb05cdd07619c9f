//! Case session management.
//!
//! `CaseSession` owns one case from generation to accusation: the hidden
//! solution, the remaining clue pools, the clues found so far, and the turn
//! budget. Restarting replaces the whole session.

use std::fmt;

use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use clue_core::{Catalog, EntityKind};

use crate::clue::Clue;
use crate::config::{CaseConfig, LeadPolicy};
use crate::error::{CaseError, CaseResult};
use crate::generator::{Case, generate_case};
use crate::journal::{Journal, JournalEntry};
use crate::verdict::{Verdict, resolve};

/// Maximum clues revealed by a single probe.
pub const CLUES_PER_PROBE: usize = 2;

/// Unique identifier for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub Uuid);

impl SessionId {
    /// Generate a new random session ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

/// Result of searching a location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationReport {
    /// The searched location.
    pub location: String,
    /// Clues taken from the location's pool.
    pub revealed: Vec<Clue>,
    /// The pool was already empty.
    pub location_had_nothing: bool,
    /// Probes left after this one.
    pub turns_remaining: u32,
}

/// Result of questioning a suspect or tracing a weapon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadReport {
    /// The suspect or weapon that was probed.
    pub subject: String,
    /// Matching clues, in pool order across locations.
    pub revealed: Vec<Clue>,
    /// Probes left after this one.
    pub turns_remaining: u32,
}

impl LeadReport {
    /// No clue mentioned the subject.
    pub fn found_nothing(&self) -> bool {
        self.revealed.is_empty()
    }
}

/// One investigation, from generated case to accusation.
pub struct CaseSession {
    id: SessionId,
    catalog: Catalog,
    config: CaseConfig,
    seed: u64,
    rng: StdRng,
    case: Case,
    discovered: Vec<String>,
    turns_used: u32,
    journal: Journal,
}

impl CaseSession {
    /// Start a session on `catalog`.
    ///
    /// Fails with [`CaseError::InvalidConfig`] for a zero turn budget.
    pub fn new(catalog: Catalog, config: CaseConfig) -> CaseResult<Self> {
        if config.turn_limit == 0 {
            return Err(CaseError::InvalidConfig(
                "turn limit must be at least 1".to_string(),
            ));
        }
        let seed = config.seed.unwrap_or_else(rand::random);
        Ok(Self::start(catalog, config, seed))
    }

    /// Start a session on the built-in Night City catalog with default rules.
    pub fn night_city(seed: Option<u64>) -> CaseResult<Self> {
        Self::new(
            Catalog::night_city(),
            CaseConfig::default().with_optional_seed(seed),
        )
    }

    fn start(catalog: Catalog, config: CaseConfig, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let case = generate_case(&catalog, config.density, &mut rng);
        let id = SessionId::new();

        tracing::info!(%id, seed, turn_limit = config.turn_limit, "case opened");

        Self {
            id,
            catalog,
            config,
            seed,
            rng,
            case,
            discovered: Vec::new(),
            turns_used: 0,
            journal: Journal::new(),
        }
    }

    /// Discard this case and open a new one with the same catalog and rules.
    /// Nothing from the old case carries over.
    ///
    /// `None` draws the next seed from this session's random source, so a
    /// chain of restarts from a seeded session is reproducible.
    pub fn restart(&mut self, seed: Option<u64>) {
        let seed = seed.unwrap_or_else(|| self.rng.random());
        *self = Self::start(self.catalog.clone(), self.config.clone(), seed);
    }

    /// Session identifier.
    pub fn id(&self) -> SessionId {
        self.id
    }

    /// The seed this case was generated from. May differ from
    /// `config().seed` after a restart.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// The catalog the case was drawn from.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The session's rules.
    pub fn config(&self) -> &CaseConfig {
        &self.config
    }

    /// The case log.
    pub fn journal(&self) -> &Journal {
        &self.journal
    }

    /// Texts of every clue found so far, in discovery order.
    pub fn discovered(&self) -> &[String] {
        &self.discovered
    }

    /// Probes spent.
    pub fn turns_used(&self) -> u32 {
        self.turns_used
    }

    /// Probe budget.
    pub fn turn_limit(&self) -> u32 {
        self.config.turn_limit
    }

    /// Probes left.
    pub fn turns_remaining(&self) -> u32 {
        self.config.turn_limit.saturating_sub(self.turns_used)
    }

    /// No probes left; only an accusation remains.
    pub fn is_exhausted(&self) -> bool {
        self.turns_used >= self.config.turn_limit
    }

    /// Search a location: take up to two clues from the front of its pool.
    /// Revealed clues are consumed.
    pub fn probe_location(&mut self, location: &str) -> CaseResult<LocationReport> {
        self.check_turn_available()?;
        self.require(EntityKind::Location, location)?;
        self.turns_used += 1;

        let revealed = self
            .case
            .distribution
            .take_front(location, CLUES_PER_PROBE);
        let texts = self.record(&revealed);

        tracing::debug!(
            location,
            revealed = revealed.len(),
            turns_remaining = self.turns_remaining(),
            "location probed"
        );

        self.journal.append(JournalEntry::LocationProbed {
            turn: self.turns_used,
            location: location.to_string(),
            clues: texts,
            timestamp: Utc::now(),
        });

        Ok(LocationReport {
            location: location.to_string(),
            location_had_nothing: revealed.is_empty(),
            revealed,
            turns_remaining: self.turns_remaining(),
        })
    }

    /// Question a suspect: collect up to two clues mentioning them from all
    /// pools.
    pub fn probe_subject(&mut self, suspect: &str) -> CaseResult<LeadReport> {
        self.probe_lead(EntityKind::Suspect, suspect)
    }

    /// Trace a weapon: collect up to two clues mentioning it from all pools.
    pub fn probe_weapon(&mut self, weapon: &str) -> CaseResult<LeadReport> {
        self.probe_lead(EntityKind::Weapon, weapon)
    }

    fn probe_lead(&mut self, kind: EntityKind, name: &str) -> CaseResult<LeadReport> {
        self.check_turn_available()?;
        self.require(kind, name)?;
        self.turns_used += 1;

        let consume = self.config.lead_policy == LeadPolicy::Consume;
        let revealed = self.case.distribution.find_leads(
            name,
            self.config.match_policy,
            CLUES_PER_PROBE,
            consume,
        );
        let texts = self.record(&revealed);

        tracing::debug!(
            %kind,
            name,
            revealed = revealed.len(),
            turns_remaining = self.turns_remaining(),
            "lead probed"
        );

        let turn = self.turns_used;
        let timestamp = Utc::now();
        let entry = match kind {
            EntityKind::Weapon => JournalEntry::WeaponTraced {
                turn,
                weapon: name.to_string(),
                clues: texts,
                timestamp,
            },
            _ => JournalEntry::SuspectQuestioned {
                turn,
                suspect: name.to_string(),
                clues: texts,
                timestamp,
            },
        };
        self.journal.append(entry);

        Ok(LeadReport {
            subject: name.to_string(),
            revealed,
            turns_remaining: self.turns_remaining(),
        })
    }

    /// Record a detective's note. Costs no turn.
    pub fn note(&mut self, text: &str) -> CaseResult<()> {
        let text = text.trim();
        if text.is_empty() {
            return Err(CaseError::InvalidInput("usage: note <text>".to_string()));
        }
        self.journal.append(JournalEntry::Note {
            text: text.to_string(),
            timestamp: Utc::now(),
        });
        Ok(())
    }

    /// Make the final accusation.
    ///
    /// Leaves the session untouched; the caller decides when to restart.
    pub fn accuse(&self, suspect: &str, weapon: &str, location: &str) -> CaseResult<Verdict> {
        let verdict = resolve(&self.catalog, &self.case, suspect, weapon, location)?;
        tracing::info!(id = %self.id, correct = verdict.correct, "accusation resolved");
        Ok(verdict)
    }

    fn check_turn_available(&self) -> CaseResult<()> {
        if self.is_exhausted() {
            return Err(CaseError::TurnsExhausted {
                limit: self.config.turn_limit,
            });
        }
        Ok(())
    }

    fn require(&self, kind: EntityKind, name: &str) -> CaseResult<()> {
        if self.catalog.contains(kind, name) {
            Ok(())
        } else {
            Err(CaseError::UnknownEntity {
                kind,
                name: name.to_string(),
            })
        }
    }

    fn record(&mut self, clues: &[Clue]) -> Vec<String> {
        let texts: Vec<String> = clues.iter().map(|c| c.text.clone()).collect();
        self.discovered.extend(texts.iter().cloned());
        texts
    }
}
