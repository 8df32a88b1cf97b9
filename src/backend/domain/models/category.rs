//! The fixed expense category set offered by the entry form.
//!
//! The stored `kategori` field is an open string at the data layer; this list
//! only governs what the UI selector offers. Snapshots written by older
//! versions may carry categories outside this list and are kept as-is.

/// One selectable expense category: the stored value and its display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryOption {
    /// Value stored in the entry and shown in aggregations.
    pub value: &'static str,
    /// Label shown in the category selector.
    pub label: &'static str,
}

/// Expense categories offered by the entry form, in menu order.
pub const EXPENSE_CATEGORIES: [CategoryOption; 7] = [
    CategoryOption { value: "Makan", label: "Biaya Makan" },
    CategoryOption { value: "Air", label: "Biaya Air" },
    CategoryOption { value: "Listrik", label: "Biaya Listrik" },
    CategoryOption { value: "Internet", label: "Biaya Internet" },
    CategoryOption { value: "Transportasi", label: "Biaya Transportasi" },
    CategoryOption { value: "Jajan & Pacar", label: "Biaya Jajan & Jalan Sama Pacar" },
    CategoryOption { value: "Dapur", label: "Biaya Dapur & Peralatan Rumah" },
];
