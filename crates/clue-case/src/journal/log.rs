//! Journal storage and export.

use serde::{Deserialize, Serialize};

use super::entry::JournalEntry;

/// A chronological log of the investigation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Journal {
    entries: Vec<JournalEntry>,
}

impl Journal {
    /// Create an empty journal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry to the journal.
    pub fn append(&mut self, entry: JournalEntry) {
        self.entries.push(entry);
    }

    /// Get all entries.
    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the journal is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Export the journal as markdown.
    pub fn export_markdown(&self) -> String {
        let mut out = String::from("# Case Journal\n\n");
        for entry in &self.entries {
            match entry {
                JournalEntry::LocationProbed {
                    turn,
                    location,
                    clues,
                    ..
                } => {
                    out.push_str(&format!("## Turn {turn}: searched {location}\n\n"));
                    push_markdown_clues(&mut out, clues, "No visible clues here.");
                }
                JournalEntry::SuspectQuestioned {
                    turn,
                    suspect,
                    clues,
                    ..
                } => {
                    out.push_str(&format!("## Turn {turn}: questioned the {suspect}\n\n"));
                    push_markdown_clues(&mut out, clues, "Nothing conclusive.");
                }
                JournalEntry::WeaponTraced {
                    turn,
                    weapon,
                    clues,
                    ..
                } => {
                    out.push_str(&format!("## Turn {turn}: traced the {weapon}\n\n"));
                    push_markdown_clues(&mut out, clues, "No relevant information.");
                }
                JournalEntry::Note { text, .. } => {
                    out.push_str(&format!("> {text}\n\n"));
                }
            }
        }
        out
    }

    /// Export the journal as plain text.
    pub fn export_text(&self) -> String {
        let mut out = String::from("Case Journal\n============\n\n");
        for entry in &self.entries {
            match entry {
                JournalEntry::LocationProbed {
                    turn,
                    location,
                    clues,
                    ..
                } => {
                    out.push_str(&format!("--- Turn {turn}: {location} ---\n"));
                    push_text_clues(&mut out, clues, "No visible clues here.");
                }
                JournalEntry::SuspectQuestioned {
                    turn,
                    suspect,
                    clues,
                    ..
                } => {
                    out.push_str(&format!("--- Turn {turn}: questioning the {suspect} ---\n"));
                    push_text_clues(&mut out, clues, "Nothing conclusive.");
                }
                JournalEntry::WeaponTraced {
                    turn,
                    weapon,
                    clues,
                    ..
                } => {
                    out.push_str(&format!("--- Turn {turn}: tracing the {weapon} ---\n"));
                    push_text_clues(&mut out, clues, "No relevant information.");
                }
                JournalEntry::Note { text, .. } => {
                    out.push_str(&format!("Note: {text}\n\n"));
                }
            }
        }
        out
    }
}

fn push_markdown_clues(out: &mut String, clues: &[String], empty: &str) {
    if clues.is_empty() {
        out.push_str(&format!("*{empty}*\n\n"));
        return;
    }
    for clue in clues {
        out.push_str(&format!("- {clue}\n"));
    }
    out.push('\n');
}

fn push_text_clues(out: &mut String, clues: &[String], empty: &str) {
    if clues.is_empty() {
        out.push_str(&format!("{empty}\n\n"));
        return;
    }
    for clue in clues {
        out.push_str(&format!("Clue found: {clue}\n"));
    }
    out.push('\n');
}
