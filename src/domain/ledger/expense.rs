//! Expense record - a categorized farm cost.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AccountId, ExpenseId, Money, OwnedByAccount, Timestamp};

/// Category of a farm expense.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseCategory {
    Feed,
    Veterinary,
    Maintenance,
    Labor,
    Other,
}

impl ExpenseCategory {
    /// Returns the stable storage/wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ExpenseCategory::Feed => "feed",
            ExpenseCategory::Veterinary => "veterinary",
            ExpenseCategory::Maintenance => "maintenance",
            ExpenseCategory::Labor => "labor",
            ExpenseCategory::Other => "other",
        }
    }

    /// Parses a stored category string.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "feed" => Some(ExpenseCategory::Feed),
            "veterinary" => Some(ExpenseCategory::Veterinary),
            "maintenance" => Some(ExpenseCategory::Maintenance),
            "labor" => Some(ExpenseCategory::Labor),
            "other" => Some(ExpenseCategory::Other),
            _ => None,
        }
    }
}

/// A record of a farm expense.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    id: ExpenseId,
    owner_id: AccountId,
    date: NaiveDate,
    category: ExpenseCategory,
    amount: Money,
    description: Option<String>,
    created_at: Timestamp,
}

impl Expense {
    /// Creates a new expense record.
    pub fn new(
        id: ExpenseId,
        owner_id: AccountId,
        date: NaiveDate,
        category: ExpenseCategory,
        amount: Money,
        description: Option<String>,
    ) -> Self {
        Self {
            id,
            owner_id,
            date,
            category,
            amount,
            description: description.filter(|d| !d.trim().is_empty()),
            created_at: Timestamp::now(),
        }
    }

    /// Reconstitutes an expense from persistence.
    pub fn reconstitute(
        id: ExpenseId,
        owner_id: AccountId,
        date: NaiveDate,
        category: ExpenseCategory,
        amount: Money,
        description: Option<String>,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            owner_id,
            date,
            category,
            amount,
            description,
            created_at,
        }
    }

    /// Returns the record ID.
    pub fn id(&self) -> ExpenseId {
        self.id
    }

    /// Returns the expense date.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Returns the expense category.
    pub fn category(&self) -> ExpenseCategory {
        self.category
    }

    /// Returns the amount spent.
    pub fn amount(&self) -> Money {
        self.amount
    }

    /// Returns the free-text description, if recorded.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns when the record was written.
    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }
}

impl OwnedByAccount for Expense {
    fn owner_id(&self) -> AccountId {
        self.owner_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn money(s: &str) -> Money {
        Money::new(s.parse::<Decimal>().unwrap()).unwrap()
    }

    #[test]
    fn category_string_conversion_roundtrips() {
        for category in [
            ExpenseCategory::Feed,
            ExpenseCategory::Veterinary,
            ExpenseCategory::Maintenance,
            ExpenseCategory::Labor,
            ExpenseCategory::Other,
        ] {
            assert_eq!(ExpenseCategory::parse(category.as_str()), Some(category));
        }
    }

    #[test]
    fn category_parse_rejects_unknown_value() {
        assert_eq!(ExpenseCategory::parse("fuel"), None);
    }

    #[test]
    fn category_serializes_lowercase() {
        let json = serde_json::to_string(&ExpenseCategory::Veterinary).unwrap();
        assert_eq!(json, "\"veterinary\"");
    }

    #[test]
    fn new_expense_drops_blank_description() {
        let expense = Expense::new(
            ExpenseId::new(),
            AccountId::new(),
            NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
            ExpenseCategory::Feed,
            money("42.00"),
            Some("  ".to_string()),
        );
        assert!(expense.description().is_none());
    }

    #[test]
    fn new_expense_keeps_description() {
        let expense = Expense::new(
            ExpenseId::new(),
            AccountId::new(),
            NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
            ExpenseCategory::Veterinary,
            money("120.00"),
            Some("vaccination round".to_string()),
        );
        assert_eq!(expense.description(), Some("vaccination round"));
    }
}
