//! Case log: every probe and note, in the order they happened.

pub mod entry;
pub mod log;

pub use entry::JournalEntry;
pub use log::Journal;
