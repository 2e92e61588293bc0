//! Expense collection with blob-store persistence.
//!
//! Holds the full expense collection in memory and writes it back as one
//! JSON array after every mutation. Reads (filter, sort, export, totals)
//! are pure projections over the in-memory collection.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{info, warn};

use crate::error::ExpenseError;
use crate::kv::KvStore;
use crate::record::{Category, ExpenseRecord, NewExpense};

/// Fixed namespace key the collection is persisted under.
pub const STORAGE_KEY: &str = "tripdeck.expenses";

/// Date ordering for [`ExpenseStore::sorted_by_date`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

/// Persistent ordered collection of expenses.
pub struct ExpenseStore {
    kv: Arc<dyn KvStore>,
    records: Vec<ExpenseRecord>,
}

impl ExpenseStore {
    /// Load the persisted collection from the blob store.
    ///
    /// A missing blob means a fresh store. A blob that fails to decode is
    /// logged and discarded so the store still initializes, empty.
    pub fn open(kv: Arc<dyn KvStore>) -> Result<Self, ExpenseError> {
        let records = match kv.get(STORAGE_KEY)? {
            None => Vec::new(),
            Some(text) => match serde_json::from_str::<Vec<ExpenseRecord>>(&text) {
                Ok(records) => records,
                Err(e) => {
                    warn!(error = %e, "Stored expense data is unreadable; starting empty");
                    Vec::new()
                }
            },
        };
        info!(count = records.len(), "Expense store loaded");
        Ok(Self { kv, records })
    }

    /// Validate a submission, assign it an id, append it, and persist.
    pub fn add(&mut self, expense: NewExpense) -> Result<ExpenseRecord, ExpenseError> {
        expense.validate()?;
        let record = expense.into_record();
        self.records.push(record.clone());
        self.persist()?;
        Ok(record)
    }

    /// Remove the record with the given id, if present, and persist.
    ///
    /// Deleting an absent id is not an error; the result says whether
    /// anything was removed.
    pub fn remove(&mut self, id: &uuid::Uuid) -> Result<bool, ExpenseError> {
        let before = self.records.len();
        self.records.retain(|r| r.id != *id);
        let removed = self.records.len() != before;
        self.persist()?;
        Ok(removed)
    }

    /// All records in insertion order.
    pub fn records(&self) -> &[ExpenseRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in the given category, or all records when `None`.
    /// Insertion order is preserved; nothing is mutated or persisted.
    pub fn filter(&self, category: Option<Category>) -> Vec<ExpenseRecord> {
        self.records
            .iter()
            .filter(|r| category.map_or(true, |c| r.category == c))
            .cloned()
            .collect()
    }

    /// Records ordered by date. Stable, so same-day records keep their
    /// insertion order.
    pub fn sorted_by_date(&self, order: SortOrder) -> Vec<ExpenseRecord> {
        let mut records = self.records.clone();
        records.sort_by_key(|r| r.date);
        if order == SortOrder::Descending {
            records.reverse();
        }
        records
    }

    /// Sum of all amounts.
    pub fn total(&self) -> f64 {
        self.records.iter().map(|r| r.amount).sum()
    }

    /// Sum of amounts in one category.
    pub fn total_for(&self, category: Category) -> f64 {
        self.records
            .iter()
            .filter(|r| r.category == category)
            .map(|r| r.amount)
            .sum()
    }

    /// Serialize the full collection to a pretty JSON blob for download.
    /// Pure; does not persist.
    pub fn export(&self) -> Result<String, ExpenseError> {
        serde_json::to_string_pretty(&self.records)
            .map_err(|e| ExpenseError::Storage(format!("Failed to serialize expenses: {}", e)))
    }

    /// Suggested file name for an export taken on the given date.
    pub fn export_file_name(date: NaiveDate) -> String {
        format!("tripdeck-expenses-{}.json", date.format("%Y-%m-%d"))
    }

    fn persist(&self) -> Result<(), ExpenseError> {
        let blob = serde_json::to_string(&self.records)
            .map_err(|e| ExpenseError::Storage(format!("Failed to serialize expenses: {}", e)))?;
        self.kv.set(STORAGE_KEY, &blob)
    }
}

/// Sample expenses for seeding a demo store.
pub fn demo_expenses() -> Vec<NewExpense> {
    let entry = |description: &str, amount: f64, category, y, m, d| NewExpense {
        description: description.to_string(),
        amount,
        category,
        // Dates are fixed and valid.
        date: NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default(),
    };
    vec![
        entry("Flight to Goa", 2500.0, Category::Transport, 2023, 10, 15),
        entry("Hotel - 3 nights", 8000.0, Category::Accommodation, 2023, 10, 15),
        entry("Dinner at beach restaurant", 1200.0, Category::Food, 2023, 10, 16),
        entry("Scuba diving", 1500.0, Category::Activities, 2023, 10, 17),
        entry("Souvenirs", 900.0, Category::Shopping, 2023, 10, 18),
        entry("Taxi fares", 600.0, Category::Transport, 2023, 10, 18),
    ]
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::MemoryKv;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 10, d).unwrap()
    }

    fn expense(description: &str, amount: f64, category: Category, day: u32) -> NewExpense {
        NewExpense {
            description: description.to_string(),
            amount,
            category,
            date: date(day),
        }
    }

    fn fresh_store() -> (Arc<MemoryKv>, ExpenseStore) {
        let kv = Arc::new(MemoryKv::new());
        let store = ExpenseStore::open(kv.clone()).unwrap();
        (kv, store)
    }

    // ---- Initialization ----

    #[test]
    fn test_open_with_no_blob_starts_empty() {
        let (_, store) = fresh_store();
        assert!(store.is_empty());
    }

    #[test]
    fn test_open_with_garbage_blob_starts_empty() {
        let kv = Arc::new(MemoryKv::new());
        kv.set(STORAGE_KEY, "not json at all").unwrap();
        let store = ExpenseStore::open(kv).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_open_with_wrong_shape_starts_empty() {
        let kv = Arc::new(MemoryKv::new());
        kv.set(STORAGE_KEY, r#"{"not": "an array"}"#).unwrap();
        let store = ExpenseStore::open(kv).unwrap();
        assert!(store.is_empty());
    }

    // ---- Add and persistence ----

    #[test]
    fn test_add_assigns_unique_ids() {
        let (_, mut store) = fresh_store();
        let a = store
            .add(expense("Flight to Goa", 2500.0, Category::Transport, 15))
            .unwrap();
        let b = store
            .add(expense("Souvenirs", 900.0, Category::Shopping, 18))
            .unwrap();
        assert_ne!(a.id, b.id);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_add_persists_across_reopen() {
        let (kv, mut store) = fresh_store();
        store
            .add(expense("Scuba diving", 1500.0, Category::Activities, 17))
            .unwrap();
        drop(store);

        let reopened = ExpenseStore::open(kv).unwrap();
        assert_eq!(reopened.len(), 1);
        assert_eq!(reopened.records()[0].description, "Scuba diving");
    }

    #[test]
    fn test_invalid_expense_is_rejected_and_not_stored() {
        let (_, mut store) = fresh_store();
        let err = store
            .add(expense("ab", 100.0, Category::Food, 16))
            .unwrap_err();
        assert!(matches!(err, ExpenseError::Validation(_)));
        assert!(store.is_empty());
    }

    // ---- Remove ----

    #[test]
    fn test_remove_existing_record() {
        let (_, mut store) = fresh_store();
        let record = store
            .add(expense("Taxi fares", 600.0, Category::Transport, 18))
            .unwrap();
        assert!(store.remove(&record.id).unwrap());
        assert!(store.is_empty());
    }

    #[test]
    fn test_remove_is_idempotent() {
        let (_, mut store) = fresh_store();
        let record = store
            .add(expense("Taxi fares", 600.0, Category::Transport, 18))
            .unwrap();
        assert!(store.remove(&record.id).unwrap());
        // Second removal of the same id is a no-op, not an error.
        assert!(!store.remove(&record.id).unwrap());
        assert!(store.is_empty());
    }

    #[test]
    fn test_remove_absent_id_is_noop() {
        let (_, mut store) = fresh_store();
        store
            .add(expense("Souvenirs", 900.0, Category::Shopping, 18))
            .unwrap();
        assert!(!store.remove(&uuid::Uuid::new_v4()).unwrap());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_remove_persists() {
        let (kv, mut store) = fresh_store();
        let record = store
            .add(expense("Souvenirs", 900.0, Category::Shopping, 18))
            .unwrap();
        store.remove(&record.id).unwrap();
        drop(store);

        let reopened = ExpenseStore::open(kv).unwrap();
        assert!(reopened.is_empty());
    }

    // ---- Filter and sort ----

    #[test]
    fn test_filter_by_category() {
        let (_, mut store) = fresh_store();
        for e in demo_expenses() {
            store.add(e).unwrap();
        }
        let transport = store.filter(Some(Category::Transport));
        assert_eq!(transport.len(), 2);
        assert!(transport.iter().all(|r| r.category == Category::Transport));
    }

    #[test]
    fn test_filter_none_returns_all() {
        let (_, mut store) = fresh_store();
        for e in demo_expenses() {
            store.add(e).unwrap();
        }
        assert_eq!(store.filter(None).len(), 6);
    }

    #[test]
    fn test_filter_does_not_mutate() {
        let (_, mut store) = fresh_store();
        for e in demo_expenses() {
            store.add(e).unwrap();
        }
        let before: Vec<_> = store.records().to_vec();
        store.filter(Some(Category::Food));
        store.sorted_by_date(SortOrder::Ascending);
        assert_eq!(store.records(), before.as_slice());
    }

    #[test]
    fn test_sorted_by_date_ascending() {
        let (_, mut store) = fresh_store();
        store
            .add(expense("Taxi fares", 600.0, Category::Transport, 18))
            .unwrap();
        store
            .add(expense("Flight to Goa", 2500.0, Category::Transport, 15))
            .unwrap();
        let sorted = store.sorted_by_date(SortOrder::Ascending);
        assert_eq!(sorted[0].date, date(15));
        assert_eq!(sorted[1].date, date(18));
    }

    #[test]
    fn test_sorted_by_date_descending() {
        let (_, mut store) = fresh_store();
        for e in demo_expenses() {
            store.add(e).unwrap();
        }
        let sorted = store.sorted_by_date(SortOrder::Descending);
        assert!(sorted.windows(2).all(|w| w[0].date >= w[1].date));
    }

    // ---- Totals ----

    #[test]
    fn test_totals() {
        let (_, mut store) = fresh_store();
        for e in demo_expenses() {
            store.add(e).unwrap();
        }
        assert_eq!(store.total(), 14_700.0);
        assert_eq!(store.total_for(Category::Transport), 3_100.0);
        assert_eq!(store.total_for(Category::Other), 0.0);
    }

    // ---- Export ----

    #[test]
    fn test_export_roundtrips_collection() {
        let (_, mut store) = fresh_store();
        for e in demo_expenses() {
            store.add(e).unwrap();
        }
        let blob = store.export().unwrap();
        let parsed: Vec<ExpenseRecord> = serde_json::from_str(&blob).unwrap();
        assert_eq!(parsed, store.records());
    }

    #[test]
    fn test_export_empty_store() {
        let (_, store) = fresh_store();
        let parsed: Vec<ExpenseRecord> = serde_json::from_str(&store.export().unwrap()).unwrap();
        assert!(parsed.is_empty());
    }

    #[test]
    fn test_export_file_name_is_dated() {
        assert_eq!(
            ExpenseStore::export_file_name(date(18)),
            "tripdeck-expenses-2023-10-18.json"
        );
    }

    // ---- Demo data ----

    #[test]
    fn test_demo_expenses_are_valid() {
        for e in demo_expenses() {
            assert!(e.validate().is_ok(), "{:?}", e);
        }
    }
}
