//! Expense tracking for Tripdeck.
//!
//! Provides validated expense records, a key-value blob persistence
//! abstraction with in-memory and file-backed implementations, and the
//! persistent expense collection with filter/sort/export projections.

pub mod error;
pub mod kv;
pub mod record;
pub mod store;

pub use error::ExpenseError;
pub use kv::{FileKv, KvStore, MemoryKv};
pub use record::{Category, ExpenseRecord, NewExpense};
pub use store::{demo_expenses, ExpenseStore, SortOrder, STORAGE_KEY};
