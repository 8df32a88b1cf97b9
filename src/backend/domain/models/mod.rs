//! Domain models for the journal.

pub mod category;
pub mod entry;
pub mod journal;
