//! Expense records and submission validation.

use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ExpenseError;

/// Minimum description length after trimming.
const MIN_DESCRIPTION_LEN: usize = 3;

/// Spending category an expense is filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Transport,
    Accommodation,
    Food,
    Activities,
    Shopping,
    Other,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 6] = [
        Category::Transport,
        Category::Accommodation,
        Category::Food,
        Category::Activities,
        Category::Shopping,
        Category::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Transport => "Transport",
            Category::Accommodation => "Accommodation",
            Category::Food => "Food",
            Category::Activities => "Activities",
            Category::Shopping => "Shopping",
            Category::Other => "Other",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = ExpenseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        Category::ALL
            .iter()
            .find(|c| c.label().to_lowercase() == lower)
            .copied()
            .ok_or_else(|| ExpenseError::Validation(format!("unknown category: {}", s)))
    }
}

/// A persisted expense. Immutable once created; deletion is the only
/// mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    pub id: Uuid,
    pub description: String,
    pub amount: f64,
    pub category: Category,
    pub date: NaiveDate,
}

/// User-submitted expense, before an id is assigned.
#[derive(Debug, Clone)]
pub struct NewExpense {
    pub description: String,
    pub amount: f64,
    pub category: Category,
    pub date: NaiveDate,
}

impl NewExpense {
    /// Validate the submission: a finite positive amount and a trimmed
    /// description of at least three characters.
    pub fn validate(&self) -> Result<(), ExpenseError> {
        if !self.amount.is_finite() || self.amount <= 0.0 {
            return Err(ExpenseError::Validation(
                "amount must be a positive number".to_string(),
            ));
        }
        if self.description.trim().chars().count() < MIN_DESCRIPTION_LEN {
            return Err(ExpenseError::Validation(format!(
                "description must be at least {} characters",
                MIN_DESCRIPTION_LEN
            )));
        }
        Ok(())
    }

    /// Assign a fresh id, producing the record to persist.
    pub fn into_record(self) -> ExpenseRecord {
        ExpenseRecord {
            id: Uuid::new_v4(),
            description: self.description.trim().to_string(),
            amount: self.amount,
            category: self.category,
            date: self.date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> NewExpense {
        NewExpense {
            description: "Flight to Goa".to_string(),
            amount: 2500.0,
            category: Category::Transport,
            date: NaiveDate::from_ymd_opt(2023, 10, 15).unwrap(),
        }
    }

    // ---- Validation ----

    #[test]
    fn test_valid_expense_passes() {
        assert!(valid().validate().is_ok());
    }

    #[test]
    fn test_zero_amount_rejected() {
        let mut e = valid();
        e.amount = 0.0;
        assert!(matches!(e.validate(), Err(ExpenseError::Validation(_))));
    }

    #[test]
    fn test_negative_amount_rejected() {
        let mut e = valid();
        e.amount = -100.0;
        assert!(e.validate().is_err());
    }

    #[test]
    fn test_non_finite_amount_rejected() {
        let mut e = valid();
        e.amount = f64::NAN;
        assert!(e.validate().is_err());
        e.amount = f64::INFINITY;
        assert!(e.validate().is_err());
    }

    #[test]
    fn test_short_description_rejected() {
        let mut e = valid();
        e.description = "ab".to_string();
        assert!(e.validate().is_err());
    }

    #[test]
    fn test_whitespace_padding_does_not_satisfy_minimum() {
        let mut e = valid();
        e.description = " a ".to_string();
        assert!(e.validate().is_err());
    }

    #[test]
    fn test_three_char_description_passes() {
        let mut e = valid();
        e.description = "Bus".to_string();
        assert!(e.validate().is_ok());
    }

    // ---- Record creation ----

    #[test]
    fn test_into_record_assigns_id_and_trims() {
        let mut e = valid();
        e.description = "  Taxi fares  ".to_string();
        let record = e.into_record();
        assert_eq!(record.description, "Taxi fares");
        assert!(!record.id.is_nil());
    }

    #[test]
    fn test_record_ids_are_unique() {
        let a = valid().into_record();
        let b = valid().into_record();
        assert_ne!(a.id, b.id);
    }

    // ---- Category parsing ----

    #[test]
    fn test_category_from_str_case_insensitive() {
        assert_eq!("food".parse::<Category>().unwrap(), Category::Food);
        assert_eq!(
            "ACCOMMODATION".parse::<Category>().unwrap(),
            Category::Accommodation
        );
    }

    #[test]
    fn test_unknown_category_rejected() {
        assert!("gadgets".parse::<Category>().is_err());
    }

    #[test]
    fn test_record_serde_roundtrip() {
        let record = valid().into_record();
        let json = serde_json::to_string(&record).unwrap();
        let back: ExpenseRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
