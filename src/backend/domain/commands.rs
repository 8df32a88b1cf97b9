//! Domain-level command types
//!
//! These structs carry raw form input into the domain layer. The UI does not
//! pre-validate; the services decide what is acceptable and reject the rest.

pub mod entries {
    use crate::backend::domain::models::entry::EntryKind;

    /// Input for recording a new entry.
    ///
    /// `amount` stays a string here: it arrives straight from the form and is
    /// parsed (and possibly rejected) by the journal service.
    #[derive(Debug, Clone)]
    pub struct AddEntryCommand {
        pub description: String,
        pub amount: String,
        pub kind: EntryKind,
        pub category: Option<String>,
    }
}
