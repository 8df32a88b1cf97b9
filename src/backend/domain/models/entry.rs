//! Domain model for a journal entry.
//!
//! The serde attributes pin the on-disk JSON shape to the historical snapshot
//! format: Indonesian field names, `tipe` as the lowercase wire word, `kategori`
//! always present (empty string for income entries) and `waktu` in the
//! JavaScript `Date` JSON shape (`2025-01-21T19:30:00.000Z`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Whether an entry adds to or subtracts from the balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryKind {
    #[serde(rename = "pemasukan")]
    Income,
    #[serde(rename = "pengeluaran")]
    Expense,
}

impl EntryKind {
    /// Wire word for this kind, as it appears in snapshots and CSV exports.
    pub fn wire_word(&self) -> &'static str {
        match self {
            EntryKind::Income => "pemasukan",
            EntryKind::Expense => "pengeluaran",
        }
    }
}

/// A single recorded income or expense.
///
/// Entries are immutable once created; there is no edit or delete operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    #[serde(rename = "deskripsi")]
    pub description: String,
    #[serde(rename = "jumlah")]
    pub amount: f64,
    #[serde(rename = "tipe")]
    pub kind: EntryKind,
    /// Expense category. `None` for income entries, which the snapshot format
    /// still records as an empty string.
    #[serde(rename = "kategori", with = "kategori_format")]
    pub category: Option<String>,
    #[serde(rename = "waktu", with = "waktu_format")]
    pub timestamp: DateTime<Utc>,
}

impl Entry {
    /// Human-readable timestamp in the `id-ID` locale shape, e.g.
    /// `25/8/2026, 14.30.05`. Shared between the entry list and CSV export.
    pub fn timestamp_display(&self) -> String {
        self.timestamp.format("%-d/%-m/%Y, %H.%M.%S").to_string()
    }
}

/// `kategori` is always present in the snapshot; income entries carry `""`.
pub(crate) mod kategori_format {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<String>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(value.as_deref().unwrap_or(""))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(if s.is_empty() { None } else { Some(s) })
    }
}

/// `waktu` serializes with millisecond precision and a `Z` suffix, matching
/// `Date.prototype.toISOString`. Any RFC 3339 timestamp is accepted on read.
pub(crate) mod waktu_format {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&s)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_entry() -> Entry {
        Entry {
            description: "Beli kopi".to_string(),
            amount: 15000.0,
            kind: EntryKind::Expense,
            category: Some("Makan".to_string()),
            timestamp: Utc.with_ymd_and_hms(2026, 8, 25, 7, 30, 5).unwrap(),
        }
    }

    #[test]
    fn test_expense_entry_serializes_to_wire_shape() {
        let json = serde_json::to_value(sample_entry()).unwrap();
        assert_eq!(json["deskripsi"], "Beli kopi");
        assert_eq!(json["jumlah"], 15000.0);
        assert_eq!(json["tipe"], "pengeluaran");
        assert_eq!(json["kategori"], "Makan");
        assert_eq!(json["waktu"], "2026-08-25T07:30:05.000Z");
    }

    #[test]
    fn test_income_entry_serializes_empty_category() {
        let entry = Entry {
            description: "Gaji".to_string(),
            amount: 5000000.0,
            kind: EntryKind::Income,
            category: None,
            timestamp: Utc.with_ymd_and_hms(2026, 8, 1, 0, 0, 0).unwrap(),
        };

        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["tipe"], "pemasukan");
        assert_eq!(json["kategori"], "");
    }

    #[test]
    fn test_deserialize_javascript_date_shape() {
        let json = r#"{
            "deskripsi": "Bayar listrik",
            "jumlah": 250000,
            "tipe": "pengeluaran",
            "kategori": "Listrik",
            "waktu": "2026-08-25T07:30:05.123Z"
        }"#;

        let entry: Entry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.description, "Bayar listrik");
        assert_eq!(entry.amount, 250000.0);
        assert_eq!(entry.kind, EntryKind::Expense);
        assert_eq!(entry.category, Some("Listrik".to_string()));
        assert_eq!(
            entry.timestamp,
            Utc.with_ymd_and_hms(2026, 8, 25, 7, 30, 5).unwrap()
                + chrono::Duration::milliseconds(123)
        );
    }

    #[test]
    fn test_deserialize_offset_timestamp_normalizes_to_utc() {
        let json = r#"{
            "deskripsi": "Gaji",
            "jumlah": 5000000,
            "tipe": "pemasukan",
            "kategori": "",
            "waktu": "2026-08-25T14:30:05+07:00"
        }"#;

        let entry: Entry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.category, None);
        assert_eq!(
            entry.timestamp,
            Utc.with_ymd_and_hms(2026, 8, 25, 7, 30, 5).unwrap()
        );
    }

    #[test]
    fn test_round_trip_preserves_entry() {
        let entry = sample_entry();
        let json = serde_json::to_string(&entry).unwrap();
        let restored: Entry = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, entry);
    }

    #[test]
    fn test_timestamp_display_has_no_leading_zeros_in_date() {
        let entry = Entry {
            timestamp: Utc.with_ymd_and_hms(2026, 1, 3, 9, 5, 7).unwrap(),
            ..sample_entry()
        };
        assert_eq!(entry.timestamp_display(), "3/1/2026, 09.05.07");
    }
}
