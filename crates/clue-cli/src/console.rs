//! Text console over a case session.
//!
//! Parses a line of player input, resolves loosely typed names to catalog
//! entries, calls the engine, and renders the result as text.

use clue_case::{CaseError, CaseResult, CaseSession, Clue, Verdict};
use clue_core::{Catalog, EntityKind};

/// Interactive console owning the current case.
pub struct Console {
    session: CaseSession,
}

impl Console {
    pub fn new(session: CaseSession) -> Self {
        Self { session }
    }

    pub fn session(&self) -> &CaseSession {
        &self.session
    }

    /// Opening text for the current case.
    pub fn intro(&self) -> String {
        let catalog = self.session.catalog();
        let mut out = String::from(
            "The tower's director has been attacked.\n\
             Find out who did it, with which weapon, and where.\n",
        );
        out.push_str(&format!(
            "You have {} turns before the trail goes cold.\n",
            self.session.turn_limit()
        ));
        for kind in EntityKind::ALL {
            out.push_str(&format!("\n{}:\n", capitalize(kind.plural())));
            for name in catalog.entries(kind) {
                out.push_str(&format!("  - {name}\n"));
            }
        }
        out.push_str("\nGood luck, detective.");
        out
    }

    /// Process a line of user input and return a response.
    pub fn process(&mut self, input: &str) -> CaseResult<String> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(String::new());
        }

        let parts: Vec<&str> = trimmed.splitn(2, ' ').collect();
        let cmd = parts[0].to_lowercase();
        let rest = parts.get(1).map(|s| s.trim()).unwrap_or("");

        match cmd.as_str() {
            "areas" | "locations" => Ok(self.do_list(EntityKind::Location)),
            "suspects" => Ok(self.do_list(EntityKind::Suspect)),
            "weapons" => Ok(self.do_list(EntityKind::Weapon)),
            "search" | "investigate" => self.do_search(rest),
            "question" | "interrogate" => self.do_question(rest),
            "trace" => self.do_trace(rest),
            "clues" => Ok(self.do_clues()),
            "note" => self.do_note(rest),
            "journal" => Ok(self.do_journal()),
            "export" => self.do_export(rest),
            "status" => Ok(self.do_status()),
            "accuse" => self.do_accuse(rest),
            "restart" => Ok(self.do_restart()),
            "help" | "?" => Ok(help_text()),
            "quit" | "q" | "exit" => Ok("Goodbye!".to_string()),
            other => Err(CaseError::InvalidInput(format!(
                "unknown command '{other}', type 'help' for commands"
            ))),
        }
    }

    fn do_list(&self, kind: EntityKind) -> String {
        let entries = self.session.catalog().entries(kind);
        let mut out = format!("{} ({}):\n", capitalize(kind.plural()), entries.len());
        for (i, name) in entries.iter().enumerate() {
            out.push_str(&format!("  {}. {name}\n", i + 1));
        }
        out.trim_end().to_string()
    }

    fn do_search(&mut self, rest: &str) -> CaseResult<String> {
        let location = self.resolve(EntityKind::Location, rest, "usage: search <location>")?;
        let report = self.session.probe_location(&location)?;
        let mut out = format!("--- {location} ---\n");
        if report.location_had_nothing {
            out.push_str("No visible clues here.\n");
        } else {
            push_clues(&mut out, &report.revealed);
        }
        out.push_str(&self.turn_line());
        Ok(out)
    }

    fn do_question(&mut self, rest: &str) -> CaseResult<String> {
        let suspect = self.resolve(EntityKind::Suspect, rest, "usage: question <suspect>")?;
        let report = self.session.probe_subject(&suspect)?;
        let mut out = format!("--- Questioning the {suspect} ---\n");
        if report.found_nothing() {
            out.push_str(&format!("Nothing conclusive about the {suspect}.\n"));
        } else {
            push_clues(&mut out, &report.revealed);
        }
        out.push_str(&self.turn_line());
        Ok(out)
    }

    fn do_trace(&mut self, rest: &str) -> CaseResult<String> {
        let weapon = self.resolve(EntityKind::Weapon, rest, "usage: trace <weapon>")?;
        let report = self.session.probe_weapon(&weapon)?;
        let mut out = format!("--- Tracing the {weapon} ---\n");
        if report.found_nothing() {
            out.push_str(&format!("No relevant information about the {weapon}.\n"));
        } else {
            push_clues(&mut out, &report.revealed);
        }
        out.push_str(&self.turn_line());
        Ok(out)
    }

    fn do_clues(&self) -> String {
        let found = self.session.discovered();
        if found.is_empty() {
            return "No clues found yet.".to_string();
        }
        let mut out = format!("Clues found ({}):\n", found.len());
        for clue in found {
            out.push_str(&format!("  - {clue}\n"));
        }
        out.trim_end().to_string()
    }

    fn do_note(&mut self, text: &str) -> CaseResult<String> {
        self.session.note(text)?;
        Ok("Note recorded.".to_string())
    }

    fn do_journal(&self) -> String {
        if self.session.journal().is_empty() {
            return "Journal is empty.".to_string();
        }
        self.session.journal().export_text().trim_end().to_string()
    }

    fn do_export(&self, format: &str) -> CaseResult<String> {
        match format.to_lowercase().as_str() {
            "markdown" | "md" | "" => Ok(self.session.journal().export_markdown()),
            "text" | "txt" => Ok(self.session.journal().export_text()),
            other => Err(CaseError::InvalidInput(format!(
                "unknown format '{other}', use: markdown, text"
            ))),
        }
    }

    fn do_status(&self) -> String {
        format!(
            "Case {} (seed {})\nTurn: {} / {}\nClues found: {}",
            self.session.id(),
            self.session.seed(),
            self.session.turns_used(),
            self.session.turn_limit(),
            self.session.discovered().len()
        )
    }

    fn do_accuse(&mut self, rest: &str) -> CaseResult<String> {
        let (suspect, weapon, location) = parse_accusation(rest)?;
        let catalog = self.session.catalog();
        let suspect = resolve_name(catalog, EntityKind::Suspect, suspect)?;
        let weapon = resolve_name(catalog, EntityKind::Weapon, weapon)?;
        let location = resolve_name(catalog, EntityKind::Location, location)?;

        let verdict = self.session.accuse(&suspect, &weapon, &location)?;
        let mut out = render_verdict(&verdict);
        self.session.restart(None);
        out.push_str("\n\nA new case begins. Type 'status' for details.");
        Ok(out)
    }

    fn do_restart(&mut self) -> String {
        self.session.restart(None);
        format!("A new case begins.\n\n{}", self.intro())
    }

    fn resolve(&self, kind: EntityKind, input: &str, usage: &str) -> CaseResult<String> {
        if input.is_empty() {
            return Err(CaseError::InvalidInput(usage.to_string()));
        }
        resolve_name(self.session.catalog(), kind, input)
    }

    fn turn_line(&self) -> String {
        let mut line = format!(
            "Turn: {} / {}",
            self.session.turns_used(),
            self.session.turn_limit()
        );
        if self.session.is_exhausted() {
            line.push_str("\nYou are out of turns. Make your accusation.");
        }
        line
    }
}

fn push_clues(out: &mut String, clues: &[Clue]) {
    for clue in clues {
        out.push_str(&format!("Clue found: {}\n", clue.text));
    }
}

fn render_verdict(verdict: &Verdict) -> String {
    let s = &verdict.solution;
    let mut out = format!("=== {} ===\n", verdict.headline());
    if verdict.correct {
        out.push_str("Correct! You solved the case.\n\n");
    } else {
        out.push_str(&format!(
            "That accusation is wrong.\nThe culprit was the {}, with the {} in the {}.\n\n",
            s.culprit, s.weapon, s.location
        ));
    }
    out.push_str(&verdict.narrative);
    out
}

/// Split `<suspect> with <weapon> in <location>`.
fn parse_accusation(input: &str) -> CaseResult<(&str, &str, &str)> {
    let usage = || {
        CaseError::InvalidInput("usage: accuse <suspect> with <weapon> in <location>".to_string())
    };
    let lower = input.to_ascii_lowercase();
    let with = lower.find(" with ").ok_or_else(usage)?;
    let after_with = with + " with ".len();
    let in_at = lower[after_with..]
        .rfind(" in ")
        .map(|i| after_with + i)
        .ok_or_else(usage)?;

    let suspect = input[..with].trim();
    let weapon = input[after_with..in_at].trim();
    let location = input[in_at + " in ".len()..].trim();
    if suspect.is_empty() || weapon.is_empty() || location.is_empty() {
        return Err(usage());
    }
    Ok((suspect, weapon, location))
}

/// Resolve loosely typed input to a catalog entry: case-insensitive exact
/// match first, then a unique case-insensitive prefix. A leading "the" is
/// ignored.
fn resolve_name(catalog: &Catalog, kind: EntityKind, input: &str) -> CaseResult<String> {
    let wanted = input.trim();
    let wanted = strip_article(wanted).to_lowercase();
    let entries = catalog.entries(kind);

    if let Some(exact) = entries.iter().find(|e| e.to_lowercase() == wanted) {
        return Ok(exact.clone());
    }

    let prefixed: Vec<&String> = entries
        .iter()
        .filter(|e| !wanted.is_empty() && e.to_lowercase().starts_with(&wanted))
        .collect();
    match prefixed.as_slice() {
        [one] => Ok((*one).clone()),
        [] => Err(CaseError::UnknownEntity {
            kind,
            name: input.trim().to_string(),
        }),
        many => Err(CaseError::InvalidInput(format!(
            "\"{}\" is ambiguous: {}",
            input.trim(),
            many.iter()
                .map(|s| s.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        ))),
    }
}

fn strip_article(s: &str) -> &str {
    match s.get(..4) {
        Some(prefix) if prefix.eq_ignore_ascii_case("the ") => s[4..].trim_start(),
        _ => s,
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn help_text() -> String {
    "\
Investigation Commands (each costs one turn):
  search <location>             Search a location for clues
  question <suspect>            Look for clues about a suspect
  trace <weapon>                Look for clues about a weapon

Case Commands:
  areas | suspects | weapons    List the catalog
  clues                         List every clue found so far
  note <text>                   Add a journal note
  journal                       Show the case journal
  export [markdown|text]        Export the case journal
  status                        Show turn and case status
  accuse <suspect> with <weapon> in <location>
                                Make your final accusation
  restart                       Abandon this case and start another
  help                          Show this help
  quit                          Exit"
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn console(seed: u64) -> Console {
        Console::new(CaseSession::night_city(Some(seed)).unwrap())
    }

    fn solution(c: &Console) -> clue_case::Solution {
        let catalog = c.session().catalog();
        clue_case::generate_seeded(catalog, clue_case::ClueDensity::Standard, c.session().seed())
            .solution
    }

    #[test]
    fn empty_input() {
        let mut c = console(1);
        assert_eq!(c.process("   ").unwrap(), "");
    }

    #[test]
    fn intro_lists_catalog() {
        let c = console(1);
        let intro = c.intro();
        assert!(intro.contains("You have 10 turns"));
        assert!(intro.contains("Suspects:"));
        assert!(intro.contains("  - Mantis Blades"));
        assert!(intro.contains("  - Prototype Workshop"));
    }

    #[test]
    fn list_commands() {
        let mut c = console(1);
        let out = c.process("weapons").unwrap();
        assert!(out.starts_with("Weapons (5):"));
        assert!(out.contains("4. Katana"));
        assert!(c.process("areas").unwrap().contains("Penthouse"));
    }

    #[test]
    fn search_uses_a_turn() {
        let mut c = console(2);
        let out = c.process("search penthouse").unwrap();
        assert!(out.starts_with("--- Penthouse ---"));
        assert!(out.ends_with("Turn: 1 / 10"));
        assert_eq!(c.session().turns_used(), 1);
    }

    #[test]
    fn question_and_trace() {
        let mut c = console(3);
        let out = c.process("question the fixer").unwrap();
        assert!(out.starts_with("--- Questioning the Fixer ---"));
        let out = c.process("trace kat").unwrap();
        assert!(out.starts_with("--- Tracing the Katana ---"));
        assert_eq!(c.session().turns_used(), 2);
    }

    #[test]
    fn missing_argument_shows_usage() {
        let mut c = console(3);
        let err = c.process("search").unwrap_err();
        assert_eq!(err.to_string(), "invalid input: usage: search <location>");
        assert_eq!(c.session().turns_used(), 0);
    }

    #[test]
    fn unknown_name_is_reported() {
        let mut c = console(3);
        let err = c.process("search the moon").unwrap_err();
        assert_eq!(err.to_string(), "unknown location: \"the moon\"");
    }

    #[test]
    fn clues_lists_discoveries() {
        let mut c = console(4);
        assert_eq!(c.process("clues").unwrap(), "No clues found yet.");
        let sol = solution(&c);
        c.process(&format!("search {}", sol.location)).unwrap();
        let out = c.process("clues").unwrap();
        assert!(out.starts_with("Clues found ("));
        assert!(out.contains("  - "));
    }

    #[test]
    fn exhaustion_message() {
        let session = CaseSession::new(
            Catalog::night_city(),
            clue_case::CaseConfig::default()
                .with_seed(5)
                .with_turn_limit(1),
        )
        .unwrap();
        let mut c = Console::new(session);
        let out = c.process("search cafeteria").unwrap();
        assert!(out.contains("You are out of turns"));
        let err = c.process("search penthouse").unwrap_err();
        assert!(matches!(err, CaseError::TurnsExhausted { limit: 1 }));
    }

    #[test]
    fn correct_accusation_then_new_case() {
        let mut c = console(6);
        let sol = solution(&c);
        let old_seed = c.session().seed();
        c.process(&format!("search {}", sol.location)).unwrap();

        let out = c
            .process(&format!(
                "accuse {} with {} in {}",
                sol.culprit.to_lowercase(),
                sol.weapon,
                sol.location
            ))
            .unwrap();
        assert!(out.starts_with("=== Case solved ==="));
        assert!(out.contains("A new case begins"));
        assert_ne!(c.session().seed(), old_seed);
        assert_eq!(c.session().turns_used(), 0);
        assert!(c.session().discovered().is_empty());
    }

    #[test]
    fn wrong_accusation_discloses_solution() {
        let mut c = console(7);
        let sol = solution(&c);
        let wrong = c
            .session()
            .catalog()
            .suspects()
            .iter()
            .find(|s| **s != sol.culprit)
            .unwrap()
            .clone();
        let out = c
            .process(&format!("accuse {wrong} with {} in {}", sol.weapon, sol.location))
            .unwrap();
        assert!(out.starts_with("=== Case failed ==="));
        assert!(out.contains(&format!(
            "The culprit was the {}, with the {} in the {}.",
            sol.culprit, sol.weapon, sol.location
        )));
    }

    #[test]
    fn malformed_accusation_keeps_case() {
        let mut c = console(8);
        let seed = c.session().seed();
        assert!(c.process("accuse the fixer").is_err());
        assert!(c.process("accuse nobody with katana in penthouse").is_err());
        assert_eq!(c.session().seed(), seed);
    }

    #[test]
    fn notes_journal_export() {
        let mut c = console(9);
        assert_eq!(c.process("journal").unwrap(), "Journal is empty.");
        assert_eq!(c.process("note check the lab").unwrap(), "Note recorded.");
        c.process("search biotech").unwrap();
        let journal = c.process("journal").unwrap();
        assert!(journal.contains("Note: check the lab"));
        assert!(journal.contains("--- Turn 1: Biotech Lab ---"));
        assert!(c.process("export md").unwrap().starts_with("# Case Journal"));
        assert!(c.process("export pdf").is_err());
    }

    #[test]
    fn status_and_restart() {
        let mut c = console(10);
        c.process("search cafeteria").unwrap();
        let status = c.process("status").unwrap();
        assert!(status.contains("(seed 10)"));
        assert!(status.contains("Turn: 1 / 10"));

        let out = c.process("restart").unwrap();
        assert!(out.starts_with("A new case begins."));
        assert_eq!(c.session().turns_used(), 0);
    }

    #[test]
    fn quit_and_unknown() {
        let mut c = console(11);
        assert_eq!(c.process("quit").unwrap(), "Goodbye!");
        assert!(c.process("dance").is_err());
        assert!(c.process("help").unwrap().contains("accuse <suspect> with <weapon>"));
    }

    #[test]
    fn parse_accusation_splits_fields() {
        let (s, w, l) =
            parse_accusation("Security Chief with Mantis Blades in Biotech Lab").unwrap();
        assert_eq!((s, w, l), ("Security Chief", "Mantis Blades", "Biotech Lab"));

        let (s, w, l) = parse_accusation("fixer WITH knife IN the penthouse").unwrap();
        assert_eq!((s, w, l), ("fixer", "knife", "the penthouse"));

        assert!(parse_accusation("fixer in penthouse").is_err());
        assert!(parse_accusation("fixer with knife").is_err());
        assert!(parse_accusation(" with knife in penthouse").is_err());
    }

    #[test]
    fn resolve_name_rules() {
        let catalog = Catalog::night_city();
        assert_eq!(
            resolve_name(&catalog, EntityKind::Suspect, "security chief").unwrap(),
            "Security Chief"
        );
        assert_eq!(
            resolve_name(&catalog, EntityKind::Location, "the proto").unwrap(),
            "Prototype Workshop"
        );
        assert!(matches!(
            resolve_name(&catalog, EntityKind::Weapon, "m"),
            Err(CaseError::InvalidInput(_))
        ));
        assert!(matches!(
            resolve_name(&catalog, EntityKind::Weapon, "spoon"),
            Err(CaseError::UnknownEntity { .. })
        ));
    }
}
