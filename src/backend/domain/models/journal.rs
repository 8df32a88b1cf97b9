//! Domain model for the persisted journal state.

use serde::{Deserialize, Serialize};

use super::entry::Entry;

/// The whole application state as persisted in the snapshot file.
///
/// `monthly_income` and `savings` are free-standing user-entered figures with
/// no arithmetic relationship to `entries`; the running balance is derived
/// from the entries alone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Journal {
    /// All recorded entries, in insertion order. Insertion order is the only
    /// ordering the journal knows about.
    #[serde(rename = "catatan")]
    pub entries: Vec<Entry>,
    /// Monthly salary figure, as entered by the user.
    #[serde(rename = "totalGaji")]
    pub monthly_income: f64,
    /// Current savings figure, as entered by the user.
    #[serde(rename = "tabungan")]
    pub savings: f64,
}

impl Default for Journal {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            monthly_income: 0.0,
            savings: 0.0,
        }
    }
}
